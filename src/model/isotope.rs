//! Nuclide variants of an element.

/// An isotope record.
///
/// Naturally occurring isotopes carry an abundance fraction in `0..=1`;
/// nuclides observed only synthetically carry `None`. Radioactive isotopes
/// carry a half-life; a primordial radioisotope (e.g. ²³⁸U) carries both.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotope {
    /// Mass number A (protons + neutrons).
    pub mass_number: u16,
    /// Isotopic mass in u.
    pub mass: f64,
    /// Natural abundance fraction, `None` when not naturally occurring.
    pub abundance: Option<f64>,
    /// Half-life in years, `None` for stable isotopes.
    pub half_life_years: Option<f64>,
}

impl Isotope {
    /// Whether the isotope occurs in nature.
    #[inline]
    pub fn is_natural(&self) -> bool {
        self.abundance.is_some()
    }

    /// Whether the isotope is stable against radioactive decay.
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.half_life_years.is_none()
    }
}
