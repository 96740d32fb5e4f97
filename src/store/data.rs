//! Raw dataset records as they appear in the TOML release artifact.
//!
//! The embedded dataset is the distribution format; it is deserialized into
//! these loosely-typed records and then validated and converted into the
//! [`model`](crate::model) types by [`PeriodicTable`](super::PeriodicTable)
//! construction. Client code never sees raw records.

use serde::Deserialize;

use crate::model::element::{Block, Series};

/// The embedded element dataset, one release per crate version.
pub(crate) const ELEMENTS_TOML: &str = include_str!("../../resources/elements.toml");

#[derive(Debug, Deserialize)]
pub(crate) struct RawDataset {
    #[serde(rename = "element")]
    pub elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawElement {
    pub atomic_number: u8,
    pub symbol: String,
    pub name: String,
    pub mass: f64,
    pub period: u8,
    pub group: Option<u8>,
    pub block: Block,
    pub series: Series,
    pub configuration: String,
    pub en_pauling: Option<f64>,
    pub en_allen: Option<f64>,
    pub electron_affinity: Option<f64>,
    pub covalent_radius: Option<f64>,
    pub vdw_radius: Option<f64>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub density: Option<f64>,
    pub discovery_year: Option<i32>,
    pub discoverer: Option<String>,
    #[serde(default)]
    pub oxidation_states: Vec<i8>,
    #[serde(default)]
    pub ionization_energies: Vec<f64>,
    #[serde(default)]
    pub isotopes: Vec<RawIsotope>,
    #[serde(default)]
    pub ionic_radii: Vec<RawIonicRadius>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawIsotope {
    pub mass_number: u16,
    pub mass: f64,
    pub abundance: Option<f64>,
    pub half_life_years: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawIonicRadius {
    pub charge: i8,
    pub coordination: String,
    pub radius: f64,
}
