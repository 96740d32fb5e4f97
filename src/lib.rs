//! A queryable periodic-table database with typed access to element
//! properties, isotopes, electron configurations, and derived chemical
//! trends.
//!
//! The element dataset is embedded in the crate and validated when loaded;
//! a [`PeriodicTable`] that constructed successfully can be queried freely
//! and shared by reference across threads.
//!
//! # Quick Start
//!
//! ```
//! use periodica::{PeriodicTable, Property, Scale};
//!
//! let table = PeriodicTable::load()?;
//!
//! // Lookup by atomic number, symbol, or name (case-insensitive).
//! let iron = table.get("Fe")?;
//! assert_eq!(iron.atomic_number, 26);
//! assert_eq!(table.get("iron")?.symbol, "Fe");
//! assert_eq!(table.get(26u8)?.name, "Iron");
//!
//! // Stored properties come back as typed values or typed errors.
//! let chi = iron.property(Property::PaulingElectronegativity)?;
//! assert!((chi - 1.83).abs() < 1e-9);
//!
//! // Derived quantities are computed on demand.
//! let zeff = iron.zeff(None, None)?;
//! assert!((zeff - 3.75).abs() < 1e-9);
//!
//! let chi_m = table.get("H")?.electronegativity(Scale::Mulliken)?;
//! assert!(chi_m > 7.0 && chi_m < 7.5);
//!
//! // Grid navigation in the 18-column layout.
//! let neighbors = table.neighbors(26)?;
//! assert_eq!(neighbors.right, Some(27)); // Co
//! # Ok::<(), periodica::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] — Element, isotope, and electron-configuration types
//! - [`store`] — Dataset loading, validation, and lookup
//! - [`trends`] — Electronegativity scales, hardness, Zeff, grid neighbors
//!
//! # Errors
//!
//! All fallible operations return [`Error`]. Lookup misses are
//! [`NotFound`](Error::NotFound), unrecorded quantities are
//! [`MissingData`](Error::MissingData), and a corrupted dataset fails
//! construction with one of the integrity variants (see
//! [`Error::is_integrity`]).

mod error;

pub mod model;
pub mod store;
pub mod trends;

pub use error::Error;

pub use model::econf::{ElectronConfiguration, ParseConfigurationError, Shell, Subshell};
pub use model::element::{Block, Element, IonicRadius, Series};
pub use model::isotope::Isotope;
pub use model::property::Property;

pub use store::{Filter, PeriodicTable, Query};

pub use trends::{Neighbors, Scale};
