//! The element store: loading, validation, and lookup.
//!
//! [`PeriodicTable`] owns the full dataset. It is constructed once — from the
//! embedded TOML release or from caller-supplied TOML — validated eagerly,
//! and read-only afterwards. Construction is the only fallible-with-integrity
//! path; a table that loaded successfully can be queried freely and shared
//! by reference across threads.

mod data;

use std::collections::HashMap;

use crate::error::Error;
use crate::model::econf::ElectronConfiguration;
use crate::model::element::{Block, Element, IonicRadius, Series};
use crate::model::isotope::Isotope;

use data::{RawDataset, RawElement, ELEMENTS_TOML};

/// Tolerance for the natural-abundance sum invariant.
const ABUNDANCE_TOLERANCE: f64 = 0.01;

/// An element identifier accepted by [`PeriodicTable::get`].
///
/// Strings that parse as an integer resolve by atomic number; everything
/// else is tried as a case-insensitive symbol first, then as a
/// case-insensitive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// Atomic number.
    AtomicNumber(u8),
    /// Symbol or name, case-insensitive.
    Text(&'a str),
}

impl From<u8> for Query<'_> {
    fn from(z: u8) -> Self {
        Query::AtomicNumber(z)
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(s: &'a str) -> Self {
        Query::Text(s)
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(s: &'a String) -> Self {
        Query::Text(s.as_str())
    }
}

/// Criteria for filtered element listings. Empty filter matches everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// Restrict to a block.
    pub block: Option<Block>,
    /// Restrict to a series.
    pub series: Option<Series>,
    /// Restrict to a period.
    pub period: Option<u8>,
    /// Restrict to a group.
    pub group: Option<u8>,
}

impl Filter {
    /// Whether the element satisfies every set criterion.
    pub fn matches(&self, element: &Element) -> bool {
        self.block.is_none_or(|b| element.block == b)
            && self.series.is_none_or(|s| element.series == s)
            && self.period.is_none_or(|p| element.period == p)
            && self.group.is_none_or(|g| element.group == Some(g))
    }
}

/// The validated, immutable element store.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    elements: Vec<Element>,
    by_symbol: HashMap<String, u8>,
    by_name: HashMap<String, u8>,
    cells: HashMap<(u8, u8), u8>,
}

impl PeriodicTable {
    /// Loads and validates the dataset embedded in the crate.
    pub fn load() -> Result<Self, Error> {
        Self::from_toml(ELEMENTS_TOML)
    }

    /// Parses and validates a dataset from TOML text.
    ///
    /// Every integrity invariant is checked here; an `Err` means the dataset
    /// is corrupted and must not be used.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let raw: RawDataset = toml::from_str(text)?;

        let mut elements = Vec::with_capacity(raw.elements.len());
        let mut by_symbol = HashMap::new();
        let mut by_name = HashMap::new();
        let mut cells = HashMap::new();

        for (index, record) in raw.elements.into_iter().enumerate() {
            let expected = index as u8 + 1;
            if record.atomic_number != expected {
                if record.atomic_number < expected {
                    return Err(Error::DuplicateAtomicNumber(record.atomic_number));
                }
                return Err(Error::NonContiguous {
                    expected,
                    found: record.atomic_number,
                });
            }

            let element = convert(record)?;
            index_identifiers(&element, &mut by_symbol, &mut by_name)?;
            index_cell(&element, &mut cells, &elements)?;
            elements.push(element);
        }

        Ok(Self {
            elements,
            by_symbol,
            by_name,
            cells,
        })
    }

    /// Number of elements in the dataset.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Looks up an element by atomic number, symbol, or name.
    ///
    /// Text that parses as an integer resolves by atomic number, so CLI
    /// arguments like `"26"` work unchanged. Symbol and name matching is
    /// case-insensitive. Fails with
    /// [`NotFound`](Error::NotFound) when nothing matches.
    pub fn get<'a, Q: Into<Query<'a>>>(&self, query: Q) -> Result<&Element, Error> {
        match query.into() {
            Query::AtomicNumber(z) => self
                .by_atomic_number(z)
                .ok_or_else(|| Error::not_found(z.to_string())),
            Query::Text(text) => {
                let trimmed = text.trim();
                if let Ok(z) = trimmed.parse::<u8>() {
                    return self
                        .by_atomic_number(z)
                        .ok_or_else(|| Error::not_found(text));
                }
                let key = trimmed.to_lowercase();
                self.by_symbol
                    .get(&key)
                    .or_else(|| self.by_name.get(&key))
                    .and_then(|&z| self.by_atomic_number(z))
                    .ok_or_else(|| Error::not_found(text))
            }
        }
    }

    /// Direct lookup by atomic number.
    pub fn by_atomic_number(&self, z: u8) -> Option<&Element> {
        if z == 0 {
            return None;
        }
        self.elements.get(z as usize - 1)
    }

    /// All elements in strictly increasing atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + Clone {
        self.elements.iter()
    }

    /// Elements matching the filter, in atomic-number order.
    pub fn list<'a>(&'a self, filter: &'a Filter) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(|e| filter.matches(e))
    }

    /// The atomic number occupying the given 18-column cell, if any.
    pub fn cell(&self, period: u8, group: u8) -> Option<u8> {
        self.cells.get(&(period, group)).copied()
    }
}

fn convert(record: RawElement) -> Result<Element, Error> {
    let configuration: ElectronConfiguration = record
        .configuration
        .parse()
        .map_err(|e: crate::model::econf::ParseConfigurationError| {
            Error::configuration(&record.symbol, e.to_string())
        })?;

    if configuration.electron_count() != u16::from(record.atomic_number) {
        return Err(Error::configuration(
            &record.symbol,
            format!(
                "configuration holds {} electrons, expected {}",
                configuration.electron_count(),
                record.atomic_number
            ),
        ));
    }

    validate_abundances(&record)?;
    validate_ionization(&record)?;

    let mut oxidation_states = record.oxidation_states;
    oxidation_states.sort_unstable();
    oxidation_states.dedup();

    let mut isotopes: Vec<Isotope> = record
        .isotopes
        .into_iter()
        .map(|iso| Isotope {
            mass_number: iso.mass_number,
            mass: iso.mass,
            abundance: iso.abundance,
            half_life_years: iso.half_life_years,
        })
        .collect();
    isotopes.sort_unstable_by_key(|iso| iso.mass_number);

    Ok(Element {
        atomic_number: record.atomic_number,
        symbol: record.symbol,
        name: record.name,
        mass: record.mass,
        period: record.period,
        group: record.group,
        block: record.block,
        series: record.series,
        configuration,
        en_pauling: record.en_pauling,
        en_allen: record.en_allen,
        electron_affinity: record.electron_affinity,
        covalent_radius: record.covalent_radius,
        vdw_radius: record.vdw_radius,
        melting_point: record.melting_point,
        boiling_point: record.boiling_point,
        density: record.density,
        discovery_year: record.discovery_year,
        discoverer: record.discoverer,
        oxidation_states,
        ionization_energies: record.ionization_energies,
        isotopes,
        ionic_radii: record
            .ionic_radii
            .into_iter()
            .map(|r| IonicRadius {
                charge: r.charge,
                coordination: r.coordination,
                radius: r.radius,
            })
            .collect(),
    })
}

fn validate_abundances(record: &RawElement) -> Result<(), Error> {
    let mut sum = 0.0;
    let mut any = false;

    for iso in &record.isotopes {
        if let Some(abundance) = iso.abundance {
            if !(0.0..=1.0).contains(&abundance) {
                return Err(Error::AbundanceSum {
                    symbol: record.symbol.clone(),
                    sum: abundance,
                });
            }
            sum += abundance;
            any = true;
        }
    }

    if any && (sum - 1.0).abs() > ABUNDANCE_TOLERANCE {
        return Err(Error::AbundanceSum {
            symbol: record.symbol.clone(),
            sum,
        });
    }

    Ok(())
}

fn validate_ionization(record: &RawElement) -> Result<(), Error> {
    for (i, pair) in record.ionization_energies.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(Error::IonizationOrder {
                symbol: record.symbol.clone(),
                degree: i as u8 + 2,
            });
        }
    }
    Ok(())
}

fn index_identifiers(
    element: &Element,
    by_symbol: &mut HashMap<String, u8>,
    by_name: &mut HashMap<String, u8>,
) -> Result<(), Error> {
    let symbol_key = element.symbol.to_lowercase();
    if by_symbol
        .insert(symbol_key, element.atomic_number)
        .is_some()
    {
        return Err(Error::DuplicateIdentifier(element.symbol.clone()));
    }

    let name_key = element.name.to_lowercase();
    if by_name.insert(name_key, element.atomic_number).is_some() {
        return Err(Error::DuplicateIdentifier(element.name.clone()));
    }

    Ok(())
}

/// Groups with a cell in each period of the 18-column layout.
fn period_groups(period: u8) -> Option<&'static [u8]> {
    const PERIOD_1: [u8; 2] = [1, 18];
    const PERIOD_2_3: [u8; 8] = [1, 2, 13, 14, 15, 16, 17, 18];
    const PERIOD_4_7: [u8; 18] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    ];

    match period {
        1 => Some(&PERIOD_1),
        2 | 3 => Some(&PERIOD_2_3),
        4..=7 => Some(&PERIOD_4_7),
        _ => None,
    }
}

fn index_cell(
    element: &Element,
    cells: &mut HashMap<(u8, u8), u8>,
    earlier: &[Element],
) -> Result<(), Error> {
    let Some(group) = element.group else {
        if element.block != Block::F {
            return Err(Error::invalid_cell(
                &element.symbol,
                "only f-block elements may omit a group",
            ));
        }
        return Ok(());
    };

    if element.block == Block::F {
        return Err(Error::invalid_cell(
            &element.symbol,
            "f-block elements occupy no cell in the 18-column layout",
        ));
    }

    let valid = period_groups(element.period)
        .map(|groups| groups.contains(&group))
        .unwrap_or(false);
    if !valid {
        return Err(Error::invalid_cell(
            &element.symbol,
            format!("no cell at period {}, group {}", element.period, group),
        ));
    }

    if let Some(&occupant) = cells.get(&(element.period, group)) {
        let other = earlier
            .iter()
            .find(|e| e.atomic_number == occupant)
            .map(|e| e.symbol.as_str())
            .unwrap_or("?");
        return Err(Error::invalid_cell(
            &element.symbol,
            format!("cell already occupied by {other}"),
        ));
    }

    cells.insert((element.period, group), element.atomic_number);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::property::Property;

    fn table() -> PeriodicTable {
        PeriodicTable::load().expect("embedded dataset must validate")
    }

    #[test]
    fn dataset_holds_all_118_elements() {
        let t = table();
        assert_eq!(t.len(), 118);

        for (i, element) in t.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1);
        }
    }

    #[test]
    fn get_by_atomic_number_round_trips() {
        let t = table();
        for z in 1..=118u8 {
            let element = t.get(z).unwrap();
            assert_eq!(element.atomic_number, z);
        }
        assert!(matches!(t.get(0u8), Err(Error::NotFound { .. })));
        assert!(matches!(t.get(119u8), Err(Error::NotFound { .. })));
    }

    #[test]
    fn symbol_lookup_is_case_insensitive() {
        let t = table();
        let a = t.get("fe").unwrap();
        let b = t.get("Fe").unwrap();
        let c = t.get("FE").unwrap();
        assert_eq!(a.atomic_number, 26);
        assert_eq!(a.atomic_number, b.atomic_number);
        assert_eq!(b.atomic_number, c.atomic_number);
    }

    #[test]
    fn numeric_text_resolves_by_atomic_number() {
        let t = table();
        assert_eq!(t.get("26").unwrap().symbol, "Fe");
        assert_eq!(t.get(" 79 ").unwrap().symbol, "Au");
        assert!(matches!(t.get("0"), Err(Error::NotFound { .. })));
        assert!(matches!(t.get("119"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn name_lookup_falls_back_after_symbol() {
        let t = table();
        assert_eq!(t.get("iron").unwrap().atomic_number, 26);
        assert_eq!(t.get("OXYGEN").unwrap().atomic_number, 8);
        assert_eq!(t.get(" tungsten ").unwrap().atomic_number, 74);
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        let t = table();
        let err = t.get("unobtainium").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(err.to_string().contains("unobtainium"));
    }

    #[test]
    fn iteration_is_ordered_and_restartable() {
        let t = table();
        let first: Vec<u8> = t.iter().map(|e| e.atomic_number).collect();
        let second: Vec<u8> = t.iter().map(|e| e.atomic_number).collect();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn natural_abundances_sum_to_one() {
        let t = table();
        for element in t.iter() {
            let sum: f64 = element
                .natural_isotopes()
                .filter_map(|iso| iso.abundance)
                .sum();
            if element.natural_isotopes().next().is_some() {
                assert!(
                    (sum - 1.0).abs() < 0.01,
                    "{}: abundance sum {sum}",
                    element.symbol
                );
            }
        }
    }

    #[test]
    fn pauling_values_are_physically_plausible() {
        let t = table();
        let mut seen = 0;
        for element in t.iter() {
            if let Ok(chi) = element.property(Property::PaulingElectronegativity) {
                assert!(
                    (0.7..=4.0).contains(&chi),
                    "{}: Pauling EN {chi}",
                    element.symbol
                );
                seen += 1;
            }
        }
        assert!(seen > 80, "expected Pauling values for most elements");
    }

    #[test]
    fn configurations_match_atomic_numbers() {
        let t = table();
        for element in t.iter() {
            assert_eq!(
                element.configuration.electron_count(),
                u16::from(element.atomic_number),
                "{}",
                element.symbol
            );
        }
    }

    #[test]
    fn filters_restrict_listings() {
        let t = table();

        let noble = Filter {
            series: Some(Series::NobleGas),
            ..Filter::default()
        };
        let symbols: Vec<&str> = t.list(&noble).map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, ["He", "Ne", "Ar", "Kr", "Xe", "Rn", "Og"]);

        let period2 = Filter {
            period: Some(2),
            ..Filter::default()
        };
        assert_eq!(t.list(&period2).count(), 8);

        let f_block = Filter {
            block: Some(Block::F),
            ..Filter::default()
        };
        assert_eq!(t.list(&f_block).count(), 28);
    }

    #[test]
    fn f_block_has_no_cells() {
        let t = table();
        for element in t.iter() {
            if element.block == Block::F {
                assert!(element.group.is_none(), "{}", element.symbol);
            } else {
                assert!(element.group.is_some(), "{}", element.symbol);
            }
        }
    }

    #[test]
    fn isotopes_are_ordered_by_mass_number() {
        let toml = r#"
            [[element]]
            atomic_number = 1
            symbol = "H"
            name = "Hydrogen"
            mass = 1.008
            period = 1
            group = 1
            block = "s"
            series = "nonmetal"
            configuration = "1s1"
            isotopes = [
                { mass_number = 2, mass = 2.014102, abundance = 0.00012 },
                { mass_number = 1, mass = 1.007825, abundance = 0.99988 },
            ]
        "#;
        let t = PeriodicTable::from_toml(toml).unwrap();
        let numbers: Vec<u16> = t
            .get("H")
            .unwrap()
            .isotopes
            .iter()
            .map(|iso| iso.mass_number)
            .collect();
        assert_eq!(numbers, [1, 2]);

        for element in table().iter() {
            let numbers: Vec<u16> = element.isotopes.iter().map(|iso| iso.mass_number).collect();
            assert!(
                numbers.windows(2).all(|w| w[0] < w[1]),
                "{}",
                element.symbol
            );
        }
    }

    #[test]
    fn rejects_duplicate_atomic_numbers() {
        let toml = r#"
            [[element]]
            atomic_number = 1
            symbol = "H"
            name = "Hydrogen"
            mass = 1.008
            period = 1
            group = 1
            block = "s"
            series = "nonmetal"
            configuration = "1s1"

            [[element]]
            atomic_number = 1
            symbol = "Hx"
            name = "Hydrogenx"
            mass = 1.008
            period = 1
            group = 18
            block = "s"
            series = "nonmetal"
            configuration = "1s1"
        "#;
        assert!(matches!(
            PeriodicTable::from_toml(toml),
            Err(Error::DuplicateAtomicNumber(1))
        ));
    }

    #[test]
    fn rejects_gaps_in_atomic_numbers() {
        let toml = r#"
            [[element]]
            atomic_number = 2
            symbol = "He"
            name = "Helium"
            mass = 4.0026
            period = 1
            group = 18
            block = "s"
            series = "noble-gas"
            configuration = "1s2"
        "#;
        assert!(matches!(
            PeriodicTable::from_toml(toml),
            Err(Error::NonContiguous {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_bad_abundance_sum() {
        let toml = r#"
            [[element]]
            atomic_number = 1
            symbol = "H"
            name = "Hydrogen"
            mass = 1.008
            period = 1
            group = 1
            block = "s"
            series = "nonmetal"
            configuration = "1s1"
            isotopes = [
                { mass_number = 1, mass = 1.007825, abundance = 0.5 },
            ]
        "#;
        let err = PeriodicTable::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::AbundanceSum { .. }));
        assert!(err.is_integrity());
    }

    #[test]
    fn rejects_configuration_electron_mismatch() {
        let toml = r#"
            [[element]]
            atomic_number = 1
            symbol = "H"
            name = "Hydrogen"
            mass = 1.008
            period = 1
            group = 1
            block = "s"
            series = "nonmetal"
            configuration = "1s2"
        "#;
        assert!(matches!(
            PeriodicTable::from_toml(toml),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn rejects_cell_conflicts() {
        let toml = r#"
            [[element]]
            atomic_number = 1
            symbol = "H"
            name = "Hydrogen"
            mass = 1.008
            period = 1
            group = 1
            block = "s"
            series = "nonmetal"
            configuration = "1s1"

            [[element]]
            atomic_number = 2
            symbol = "He"
            name = "Helium"
            mass = 4.0026
            period = 1
            group = 1
            block = "s"
            series = "noble-gas"
            configuration = "1s2"
        "#;
        assert!(matches!(
            PeriodicTable::from_toml(toml),
            Err(Error::InvalidCell { .. })
        ));
    }

    #[test]
    fn rejects_unordered_ionization_energies() {
        let toml = r#"
            [[element]]
            atomic_number = 1
            symbol = "H"
            name = "Hydrogen"
            mass = 1.008
            period = 1
            group = 1
            block = "s"
            series = "nonmetal"
            configuration = "1s1"
            ionization_energies = [13.598, 13.0]
        "#;
        assert!(matches!(
            PeriodicTable::from_toml(toml),
            Err(Error::IonizationOrder { degree: 2, .. })
        ));
    }
}
