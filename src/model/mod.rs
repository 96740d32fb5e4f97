//! Core data structures representing elements and their nuclear variants.
//!
//! This module provides the foundational types that flow through `periodica`:
//!
//! - [`element`] – The element record with typed, unit-aware property access.
//! - [`isotope`] – Nuclide variants with mass, abundance, and half-life.
//! - [`econf`] – Electron configuration parsing and Slater screening.
//! - [`property`] – Names and units for optional numeric properties.
//!
//! The data model intentionally keeps missing measurements explicit: optional
//! fields are `Option`, and [`Element::property`](element::Element::property)
//! converts absence into a typed error instead of a silent null.

pub mod econf;
pub mod element;
pub mod isotope;
pub mod property;
