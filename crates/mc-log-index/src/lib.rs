//! # mc-log-index
//!
//! Data model for the historical event and transfer log index: the rows a
//! log store persists and the filters a query surface accepts. Storage and
//! query execution live elsewhere; this crate only fixes the shapes they
//! exchange.

pub mod domain;

pub use domain::*;
