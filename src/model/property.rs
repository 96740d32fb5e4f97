//! Names and units for the numeric properties an element may carry.

use std::fmt;

/// A named numeric property with unit metadata.
///
/// Used with [`Element::property`](super::element::Element::property) to
/// request a value and get a typed [`MissingData`](crate::Error::MissingData)
/// error when the element has no recorded measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Relative atomic mass (always recorded).
    AtomicMass,
    /// Covalent radius, single-bond.
    CovalentRadius,
    /// Van der Waals radius.
    VanDerWaalsRadius,
    /// Electronegativity on the Pauling scale.
    PaulingElectronegativity,
    /// Electronegativity on the Allen scale.
    AllenElectronegativity,
    /// Electron affinity of the neutral atom.
    ElectronAffinity,
    /// First ionization energy.
    FirstIonizationEnergy,
    /// Melting point at standard pressure.
    MeltingPoint,
    /// Boiling point at standard pressure.
    BoilingPoint,
    /// Density near room temperature (gases at boiling point).
    Density,
}

impl Property {
    /// All properties, in display order.
    pub const ALL: [Property; 10] = [
        Property::AtomicMass,
        Property::CovalentRadius,
        Property::VanDerWaalsRadius,
        Property::PaulingElectronegativity,
        Property::AllenElectronegativity,
        Property::ElectronAffinity,
        Property::FirstIonizationEnergy,
        Property::MeltingPoint,
        Property::BoilingPoint,
        Property::Density,
    ];

    /// The unit values of this property are expressed in; empty for
    /// dimensionless quantities.
    pub fn unit(&self) -> &'static str {
        match self {
            Property::AtomicMass => "u",
            Property::CovalentRadius | Property::VanDerWaalsRadius => "pm",
            Property::PaulingElectronegativity | Property::AllenElectronegativity => "",
            Property::ElectronAffinity | Property::FirstIonizationEnergy => "eV",
            Property::MeltingPoint | Property::BoilingPoint => "K",
            Property::Density => "g/cm³",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::AtomicMass => "atomic mass",
            Property::CovalentRadius => "covalent radius",
            Property::VanDerWaalsRadius => "van der Waals radius",
            Property::PaulingElectronegativity => "Pauling electronegativity",
            Property::AllenElectronegativity => "Allen electronegativity",
            Property::ElectronAffinity => "electron affinity",
            Property::FirstIonizationEnergy => "first ionization energy",
            Property::MeltingPoint => "melting point",
            Property::BoilingPoint => "boiling point",
            Property::Density => "density",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_attached() {
        assert_eq!(Property::AtomicMass.unit(), "u");
        assert_eq!(Property::CovalentRadius.unit(), "pm");
        assert_eq!(Property::FirstIonizationEnergy.unit(), "eV");
        assert_eq!(Property::PaulingElectronegativity.unit(), "");
        assert_eq!(Property::Density.unit(), "g/cm³");
    }

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(
            Property::PaulingElectronegativity.to_string(),
            "Pauling electronegativity"
        );
        assert_eq!(Property::VanDerWaalsRadius.to_string(), "van der Waals radius");
    }
}
