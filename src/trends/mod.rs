//! Derived chemical quantities computed from stored attributes.
//!
//! Everything here is a pure function of an [`Element`] (and, for grid
//! neighbors, the [`PeriodicTable`] cell layout): deterministic,
//! side-effect-free, and failing with typed errors when the inputs are not
//! recorded for an element.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::model::econf::Subshell;
use crate::model::element::Element;
use crate::model::property::Property;
use crate::store::PeriodicTable;

/// Allred–Rochow coefficient for radii in pm: χ = C·Zeff/r² + 0.744.
const ALLRED_ROCHOW_COEFF: f64 = 3590.0;
const ALLRED_ROCHOW_OFFSET: f64 = 0.744;

/// A named electronegativity scale.
///
/// Pauling and Allen values are stored in the dataset; Mulliken and
/// Allred–Rochow are computed from ionization energies, electron affinity,
/// and screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Pauling,
    Allen,
    Mulliken,
    AllredRochow,
}

impl Scale {
    /// All supported scales, in display order.
    pub const ALL: [Scale; 4] = [
        Scale::Pauling,
        Scale::Allen,
        Scale::Mulliken,
        Scale::AllredRochow,
    ];
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scale::Pauling => "Pauling",
            Scale::Allen => "Allen",
            Scale::Mulliken => "Mulliken",
            Scale::AllredRochow => "Allred-Rochow",
        };
        f.write_str(name)
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pauling" => Ok(Scale::Pauling),
            "allen" => Ok(Scale::Allen),
            "mulliken" => Ok(Scale::Mulliken),
            "allred-rochow" | "allred_rochow" | "allredrochow" => Ok(Scale::AllredRochow),
            _ => Err(Error::UnsupportedScale(s.to_string())),
        }
    }
}

/// Atomic numbers of the grid-adjacent elements, `None` past an edge or
/// next to an unoccupied cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub up: Option<u8>,
    pub down: Option<u8>,
    pub left: Option<u8>,
    pub right: Option<u8>,
}

impl Element {
    /// Electronegativity on the requested scale.
    ///
    /// Fails with [`MissingData`](Error::MissingData) when the inputs the
    /// scale needs are not recorded for this element.
    pub fn electronegativity(&self, scale: Scale) -> Result<f64, Error> {
        match scale {
            Scale::Pauling => self.property(Property::PaulingElectronegativity),
            Scale::Allen => self.property(Property::AllenElectronegativity),
            Scale::Mulliken => self.absolute_electronegativity(0),
            Scale::AllredRochow => {
                let radius = self.property(Property::CovalentRadius)?;
                let zeff = self.zeff(None, None)?;
                Ok(ALLRED_ROCHOW_COEFF * zeff / (radius * radius) + ALLRED_ROCHOW_OFFSET)
            }
        }
    }

    /// Absolute (Mulliken) electronegativity χ = (I + A) / 2 in eV.
    ///
    /// For a cation of the given charge the electron affinity is the
    /// previous ionization energy, so χ = (I(k+1) + I(k)) / 2.
    pub fn absolute_electronegativity(&self, charge: u8) -> Result<f64, Error> {
        let (i, a) = self.frontier_energies(charge)?;
        Ok((i + a) / 2.0)
    }

    /// Absolute hardness η = (I − A) / 2 in eV (Parr–Pearson).
    pub fn hardness(&self, charge: u8) -> Result<f64, Error> {
        let (i, a) = self.frontier_energies(charge)?;
        Ok((i - a) / 2.0)
    }

    /// Absolute softness S = 1 / 2η in eV⁻¹.
    pub fn softness(&self, charge: u8) -> Result<f64, Error> {
        let eta = self.hardness(charge)?;
        Ok(1.0 / (2.0 * eta))
    }

    /// Effective nuclear charge via Slater's rules.
    ///
    /// Defaults to the outermost occupied shell and its highest occupied
    /// subshell, matching the conventional "valence electron" Zeff.
    pub fn zeff(&self, n: Option<u8>, subshell: Option<Subshell>) -> Result<f64, Error> {
        let n = n.unwrap_or_else(|| self.configuration.max_n());
        let subshell = match subshell {
            Some(s) => s,
            None => self.configuration.highest_subshell(n).ok_or_else(|| {
                Error::missing(&self.symbol, format!("occupied subshell in shell {n}"))
            })?,
        };

        if self.configuration.occupancy(n, subshell) == 0 {
            return Err(Error::missing(
                &self.symbol,
                format!("electrons in {n}{subshell}"),
            ));
        }

        let screening = self.configuration.slater_screening(n, subshell);
        Ok(f64::from(self.atomic_number) - screening)
    }

    /// Ionization energy I and electron affinity A for the ion of the given
    /// charge.
    fn frontier_energies(&self, charge: u8) -> Result<(f64, f64), Error> {
        if charge == 0 {
            let i = self
                .ionization_energy(1)
                .ok_or_else(|| Error::missing(&self.symbol, "first ionization energy"))?;
            let a = self.property(Property::ElectronAffinity)?;
            return Ok((i, a));
        }

        let i = self.ionization_energy(charge + 1).ok_or_else(|| {
            Error::missing(
                &self.symbol,
                format!("ionization energy of degree {}", charge + 1),
            )
        })?;
        let a = self.ionization_energy(charge).ok_or_else(|| {
            Error::missing(
                &self.symbol,
                format!("ionization energy of degree {charge}"),
            )
        })?;
        Ok((i, a))
    }
}

impl PeriodicTable {
    /// Grid neighbors of an element in the 18-column layout.
    ///
    /// F-block elements occupy no cell and have no neighbors. Adjacency is
    /// strict cell adjacency, so the s/p gap in short periods separates
    /// groups 2 and 13.
    pub fn neighbors(&self, z: u8) -> Result<Neighbors, Error> {
        let element = self
            .by_atomic_number(z)
            .ok_or_else(|| Error::not_found(z.to_string()))?;

        let Some(group) = element.group else {
            return Ok(Neighbors::default());
        };
        let period = element.period;

        Ok(Neighbors {
            up: period.checked_sub(1).and_then(|p| self.cell(p, group)),
            down: self.cell(period + 1, group),
            left: group.checked_sub(1).and_then(|g| self.cell(period, g)),
            right: self.cell(period, group + 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PeriodicTable {
        PeriodicTable::load().expect("embedded dataset must validate")
    }

    #[test]
    fn scale_parsing_accepts_known_names() {
        assert_eq!("pauling".parse::<Scale>().unwrap(), Scale::Pauling);
        assert_eq!("Pauling".parse::<Scale>().unwrap(), Scale::Pauling);
        assert_eq!("ALLEN".parse::<Scale>().unwrap(), Scale::Allen);
        assert_eq!("mulliken".parse::<Scale>().unwrap(), Scale::Mulliken);
        assert_eq!(
            "allred-rochow".parse::<Scale>().unwrap(),
            Scale::AllredRochow
        );
    }

    #[test]
    fn unknown_scale_is_rejected() {
        let err = "sanderson".parse::<Scale>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedScale(_)));
        assert!(err.to_string().contains("sanderson"));
    }

    #[test]
    fn pauling_scale_reads_stored_value() {
        let t = table();
        let fe = t.get("Fe").unwrap();
        let chi = fe.electronegativity(Scale::Pauling).unwrap();
        assert!((chi - 1.83).abs() < 1e-9);
    }

    #[test]
    fn mulliken_is_mean_of_ie_and_ea() {
        let t = table();
        let h = t.get("H").unwrap();
        let chi = h.electronegativity(Scale::Mulliken).unwrap();
        assert!((chi - (13.598 + 0.754) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn mulliken_fails_without_electron_affinity() {
        let t = table();
        // Helium does not bind an extra electron; no EA is recorded.
        let he = t.get("He").unwrap();
        assert!(matches!(
            he.electronegativity(Scale::Mulliken),
            Err(Error::MissingData { .. })
        ));
    }

    #[test]
    fn hardness_and_softness_are_consistent() {
        let t = table();
        let h = t.get("H").unwrap();
        let eta = h.hardness(0).unwrap();
        assert!((eta - (13.598 - 0.754) / 2.0).abs() < 1e-9);

        let s = h.softness(0).unwrap();
        assert!((s - 1.0 / (2.0 * eta)).abs() < 1e-12);
    }

    #[test]
    fn cation_hardness_uses_successive_ionization_energies() {
        let t = table();
        let li = t.get("Li").unwrap();
        // η(+1) = (IE2 - IE1) / 2
        let ie1 = li.ionization_energy(1).unwrap();
        let ie2 = li.ionization_energy(2).unwrap();
        let eta = li.hardness(1).unwrap();
        assert!((eta - (ie2 - ie1) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn cation_hardness_fails_past_recorded_degrees() {
        let t = table();
        let h = t.get("H").unwrap();
        assert!(matches!(h.hardness(1), Err(Error::MissingData { .. })));
    }

    #[test]
    fn zeff_defaults_to_valence_shell() {
        let t = table();
        let fe = t.get("Fe").unwrap();
        // Fe 4s: 26 - 22.25
        let z = fe.zeff(None, None).unwrap();
        assert!((z - 3.75).abs() < 1e-9);

        // Fe 3d: 26 - 19.75
        let z3d = fe.zeff(Some(3), Some(Subshell::D)).unwrap();
        assert!((z3d - 6.25).abs() < 1e-9);
    }

    #[test]
    fn zeff_rejects_empty_subshells() {
        let t = table();
        let h = t.get("H").unwrap();
        assert!(matches!(
            h.zeff(Some(2), Some(Subshell::S)),
            Err(Error::MissingData { .. })
        ));
    }

    #[test]
    fn allred_rochow_is_in_a_sane_range() {
        let t = table();
        let c = t.get("C").unwrap();
        let chi = c.electronegativity(Scale::AllredRochow).unwrap();
        assert!(chi > 1.0 && chi < 4.5, "C Allred-Rochow: {chi}");
    }

    #[test]
    fn neighbors_of_iron() {
        let t = table();
        let n = t.neighbors(26).unwrap();
        assert_eq!(n.left, Some(25)); // Mn
        assert_eq!(n.right, Some(27)); // Co
        assert_eq!(n.down, Some(44)); // Ru
        assert_eq!(n.up, None); // period 3 has no group-8 cell
    }

    #[test]
    fn neighbors_at_table_edges() {
        let t = table();

        let h = t.neighbors(1).unwrap();
        assert_eq!(h.up, None);
        assert_eq!(h.left, None);
        assert_eq!(h.right, None); // period 1 has no group-2 cell
        assert_eq!(h.down, Some(3)); // Li

        let he = t.neighbors(2).unwrap();
        assert_eq!(he.left, None);
        assert_eq!(he.down, Some(10)); // Ne
    }

    #[test]
    fn f_block_elements_have_no_neighbors() {
        let t = table();
        let ce = t.neighbors(58).unwrap();
        assert_eq!(ce, Neighbors::default());
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let t = table();
        for element in t.iter() {
            let z = element.atomic_number;
            let n = t.neighbors(z).unwrap();
            if let Some(right) = n.right {
                assert_eq!(t.neighbors(right).unwrap().left, Some(z));
            }
            if let Some(down) = n.down {
                assert_eq!(t.neighbors(down).unwrap().up, Some(z));
            }
            if let Some(left) = n.left {
                assert_eq!(t.neighbors(left).unwrap().right, Some(z));
            }
            if let Some(up) = n.up {
                assert_eq!(t.neighbors(up).unwrap().down, Some(z));
            }
        }
    }
}
