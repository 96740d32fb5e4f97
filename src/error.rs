//! Error types for dataset loading and element queries.
//!
//! This module defines the error type used throughout the crate. Errors are
//! categorized by source: lookup failures, absent property values, unknown
//! electronegativity scales, and dataset integrity violations detected while
//! loading.

use thiserror::Error;

/// Errors that can occur while loading the dataset or querying it.
///
/// Lookup and computation errors surface directly to the caller. The
/// integrity variants are produced only by [`PeriodicTable`](crate::PeriodicTable)
/// construction and indicate a corrupted dataset; a table that loaded
/// successfully never raises them afterwards.
#[derive(Debug, Error)]
pub enum Error {
    /// No element matches the requested identifier.
    #[error("no element matches '{query}'")]
    NotFound {
        /// The identifier as given by the caller.
        query: String,
    },

    /// The requested property has no recorded value for this element.
    ///
    /// Common for synthetic and superheavy elements, where many quantities
    /// have never been measured.
    #[error("no recorded {property} for {symbol}")]
    MissingData {
        /// Element symbol.
        symbol: String,
        /// Human-readable property name.
        property: String,
    },

    /// Unknown electronegativity scale name.
    #[error("unsupported electronegativity scale: '{0}'")]
    UnsupportedScale(String),

    /// The dataset TOML failed to parse.
    #[error("failed to parse element dataset: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two records share an atomic number.
    #[error("dataset integrity: duplicate atomic number {0}")]
    DuplicateAtomicNumber(u8),

    /// Records are not sorted contiguously by atomic number.
    #[error("dataset integrity: expected atomic number {expected}, found {found}")]
    NonContiguous {
        /// The atomic number that should appear at this position.
        expected: u8,
        /// The atomic number actually found.
        found: u8,
    },

    /// Two records share a symbol or a name (case-insensitive).
    #[error("dataset integrity: duplicate identifier '{0}'")]
    DuplicateIdentifier(String),

    /// An element's (period, group) coordinates do not form a valid cell,
    /// or two elements claim the same cell.
    #[error("dataset integrity: invalid table cell for {symbol}: {detail}")]
    InvalidCell {
        /// Element symbol.
        symbol: String,
        /// Description of the problem.
        detail: String,
    },

    /// Natural isotope abundances do not sum to ~1.
    #[error("dataset integrity: isotope abundances of {symbol} sum to {sum:.4}, expected ~1")]
    AbundanceSum {
        /// Element symbol.
        symbol: String,
        /// The actual sum.
        sum: f64,
    },

    /// Ionization energies are not strictly increasing with degree.
    #[error("dataset integrity: ionization energies of {symbol} not increasing at degree {degree}")]
    IonizationOrder {
        /// Element symbol.
        symbol: String,
        /// First degree at which the ordering breaks.
        degree: u8,
    },

    /// The electron configuration string is malformed or inconsistent
    /// with the atomic number.
    #[error("dataset integrity: bad electron configuration for {symbol}: {detail}")]
    Configuration {
        /// Element symbol.
        symbol: String,
        /// Description of the problem.
        detail: String,
    },
}

impl Error {
    /// Creates a [`NotFound`](Error::NotFound) error.
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Creates a [`MissingData`](Error::MissingData) error.
    pub fn missing(symbol: &str, property: impl Into<String>) -> Self {
        Self::MissingData {
            symbol: symbol.to_string(),
            property: property.into(),
        }
    }

    /// Creates an [`InvalidCell`](Error::InvalidCell) error.
    pub fn invalid_cell(symbol: &str, detail: impl Into<String>) -> Self {
        Self::InvalidCell {
            symbol: symbol.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates a [`Configuration`](Error::Configuration) error.
    pub fn configuration(symbol: &str, detail: impl Into<String>) -> Self {
        Self::Configuration {
            symbol: symbol.to_string(),
            detail: detail.into(),
        }
    }

    /// Returns `true` for variants that indicate a corrupted dataset.
    ///
    /// Integrity errors are fatal: a table that fails to load must not
    /// be used.
    pub fn is_integrity(&self) -> bool {
        !matches!(
            self,
            Error::NotFound { .. } | Error::MissingData { .. } | Error::UnsupportedScale(_)
        )
    }
}
