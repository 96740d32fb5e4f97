//! The element record and its typed property access.

use std::fmt;

use serde::Deserialize;

use crate::error::Error;
use crate::model::econf::ElectronConfiguration;
use crate::model::isotope::Isotope;
use crate::model::property::Property;

/// Periodic table block, named after the subshell being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Block::S => 's',
            Block::P => 'p',
            Block::D => 'd',
            Block::F => 'f',
        };
        write!(f, "{c}")
    }
}

/// Chemical series (row color on a printed periodic table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Series {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PoorMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::AlkaliMetal => "alkali metal",
            Series::AlkalineEarthMetal => "alkaline earth metal",
            Series::TransitionMetal => "transition metal",
            Series::PoorMetal => "poor metal",
            Series::Metalloid => "metalloid",
            Series::Nonmetal => "nonmetal",
            Series::Halogen => "halogen",
            Series::NobleGas => "noble gas",
            Series::Lanthanide => "lanthanide",
            Series::Actinide => "actinide",
        };
        f.write_str(name)
    }
}

/// A Shannon-style effective ionic radius entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IonicRadius {
    /// Charge of the ion.
    pub charge: i8,
    /// Coordination environment (Roman numeral convention, e.g. "VI").
    pub coordination: String,
    /// Effective ionic radius in pm.
    pub radius: f64,
}

/// A chemical element record.
///
/// One record per element, keyed by atomic number. Quantities that have not
/// been measured for an element — common past fermium — are `None`; use
/// [`property`](Element::property) to turn absence into a typed error.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Atomic number Z, the primary identity.
    pub atomic_number: u8,
    /// Chemical symbol, one or two letters.
    pub symbol: String,
    /// English name.
    pub name: String,
    /// Relative atomic mass in u.
    pub mass: f64,
    /// Period (row), 1–7.
    pub period: u8,
    /// Group (column) 1–18; `None` for f-block elements, which occupy no
    /// cell in the 18-column layout.
    pub group: Option<u8>,
    /// Block in the periodic table.
    pub block: Block,
    /// Chemical series.
    pub series: Series,
    /// Ground-state electron configuration.
    pub configuration: ElectronConfiguration,
    /// Electronegativity, Pauling scale.
    pub en_pauling: Option<f64>,
    /// Electronegativity, Allen scale.
    pub en_allen: Option<f64>,
    /// Electron affinity in eV.
    pub electron_affinity: Option<f64>,
    /// Covalent radius in pm.
    pub covalent_radius: Option<f64>,
    /// Van der Waals radius in pm.
    pub vdw_radius: Option<f64>,
    /// Melting point in K.
    pub melting_point: Option<f64>,
    /// Boiling point in K.
    pub boiling_point: Option<f64>,
    /// Density in g/cm³.
    pub density: Option<f64>,
    /// Year of discovery; `None` for elements known since antiquity.
    pub discovery_year: Option<i32>,
    /// Discoverer(s), where history names them.
    pub discoverer: Option<String>,
    /// Known oxidation states, ascending.
    pub oxidation_states: Vec<i8>,
    /// Successive ionization energies in eV; index 0 is degree 1.
    pub ionization_energies: Vec<f64>,
    /// Isotopes, ascending by mass number. Empty when none are recorded.
    pub isotopes: Vec<Isotope>,
    /// Effective ionic radii entries.
    pub ionic_radii: Vec<IonicRadius>,
}

impl Element {
    /// Looks up a numeric property, failing with
    /// [`MissingData`](Error::MissingData) when the element has no recorded
    /// value.
    pub fn property(&self, property: Property) -> Result<f64, Error> {
        let value = match property {
            Property::AtomicMass => Some(self.mass),
            Property::CovalentRadius => self.covalent_radius,
            Property::VanDerWaalsRadius => self.vdw_radius,
            Property::PaulingElectronegativity => self.en_pauling,
            Property::AllenElectronegativity => self.en_allen,
            Property::ElectronAffinity => self.electron_affinity,
            Property::FirstIonizationEnergy => self.ionization_energies.first().copied(),
            Property::MeltingPoint => self.melting_point,
            Property::BoilingPoint => self.boiling_point,
            Property::Density => self.density,
        };
        value.ok_or_else(|| Error::missing(&self.symbol, property.to_string()))
    }

    /// Ionization energy in eV for the given degree (1 = first).
    pub fn ionization_energy(&self, degree: u8) -> Option<f64> {
        if degree == 0 {
            return None;
        }
        self.ionization_energies.get(degree as usize - 1).copied()
    }

    /// Number of protons (= Z).
    #[inline]
    pub fn protons(&self) -> u8 {
        self.atomic_number
    }

    /// Number of electrons in the neutral atom (= Z).
    #[inline]
    pub fn electrons(&self) -> u8 {
        self.atomic_number
    }

    /// Naturally occurring isotopes.
    pub fn natural_isotopes(&self) -> impl Iterator<Item = &Isotope> {
        self.isotopes.iter().filter(|iso| iso.is_natural())
    }

    /// Mass number of the most abundant natural isotope, when recorded.
    pub fn mass_number(&self) -> Option<u16> {
        self.natural_isotopes()
            .max_by(|a, b| {
                a.abundance
                    .unwrap_or(0.0)
                    .total_cmp(&b.abundance.unwrap_or(0.0))
            })
            .map(|iso| iso.mass_number)
    }

    /// Neutron count of the most abundant natural isotope, when recorded.
    pub fn neutrons(&self) -> Option<u16> {
        self.mass_number()
            .map(|a| a - u16::from(self.atomic_number))
    }

    /// Atomic mass computed from the recorded isotopic composition, `None`
    /// when no natural isotopes are recorded.
    pub fn exact_mass(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut any = false;
        for iso in self.natural_isotopes() {
            sum += iso.mass * iso.abundance.unwrap_or(0.0);
            any = true;
        }
        any.then_some(sum)
    }

    /// Electrons outside the noble-gas core.
    pub fn valence_electrons(&self) -> u16 {
        self.configuration.valence_electrons()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.atomic_number, self.symbol, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::econf::Subshell;

    fn iron() -> Element {
        Element {
            atomic_number: 26,
            symbol: "Fe".to_string(),
            name: "Iron".to_string(),
            mass: 55.845,
            period: 4,
            group: Some(8),
            block: Block::D,
            series: Series::TransitionMetal,
            configuration: "[Ar] 3d6 4s2".parse().unwrap(),
            en_pauling: Some(1.83),
            en_allen: None,
            electron_affinity: Some(0.151),
            covalent_radius: Some(132.0),
            vdw_radius: None,
            melting_point: Some(1811.0),
            boiling_point: Some(3134.0),
            density: Some(7.874),
            discovery_year: None,
            discoverer: None,
            oxidation_states: vec![2, 3, 6],
            ionization_energies: vec![7.902, 16.199, 30.651],
            isotopes: vec![
                Isotope {
                    mass_number: 54,
                    mass: 53.939609,
                    abundance: Some(0.05845),
                    half_life_years: None,
                },
                Isotope {
                    mass_number: 56,
                    mass: 55.934936,
                    abundance: Some(0.91754),
                    half_life_years: None,
                },
                Isotope {
                    mass_number: 57,
                    mass: 56.935393,
                    abundance: Some(0.02119),
                    half_life_years: None,
                },
                Isotope {
                    mass_number: 58,
                    mass: 57.933274,
                    abundance: Some(0.00282),
                    half_life_years: None,
                },
            ],
            ionic_radii: vec![IonicRadius {
                charge: 3,
                coordination: "VI".to_string(),
                radius: 64.5,
            }],
        }
    }

    #[test]
    fn property_access_present_and_missing() {
        let fe = iron();
        assert_eq!(fe.property(Property::AtomicMass).unwrap(), 55.845);
        assert_eq!(fe.property(Property::CovalentRadius).unwrap(), 132.0);

        let err = fe.property(Property::AllenElectronegativity).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Allen electronegativity"));
        assert!(msg.contains("Fe"));
    }

    #[test]
    fn ionization_energy_by_degree() {
        let fe = iron();
        assert_eq!(fe.ionization_energy(1), Some(7.902));
        assert_eq!(fe.ionization_energy(3), Some(30.651));
        assert_eq!(fe.ionization_energy(4), None);
        assert_eq!(fe.ionization_energy(0), None);
    }

    #[test]
    fn nucleon_bookkeeping() {
        let fe = iron();
        assert_eq!(fe.protons(), 26);
        assert_eq!(fe.electrons(), 26);
        assert_eq!(fe.mass_number(), Some(56));
        assert_eq!(fe.neutrons(), Some(30));
    }

    #[test]
    fn exact_mass_close_to_standard_mass() {
        let fe = iron();
        let exact = fe.exact_mass().unwrap();
        assert!((exact - fe.mass).abs() < 0.05);
    }

    #[test]
    fn valence_electrons_from_configuration() {
        let fe = iron();
        assert_eq!(fe.valence_electrons(), 8);
        assert_eq!(fe.configuration.highest_subshell(3), Some(Subshell::D));
    }

    #[test]
    fn display_is_z_symbol_name() {
        assert_eq!(iron().to_string(), "26 Fe Iron");
    }
}
