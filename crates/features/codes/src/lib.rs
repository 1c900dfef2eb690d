//! # CPV Codes
//!
//! The read side of the CPV vocabulary: a lazily loaded registry of codes with
//! `(code, version)` lookup, and an index of legacy mappings between vocabulary editions.
//!
//! Both read a JSON array from a dataset root directory. [`BUNDLED_DATASET`] is a small
//! sample of the vocabulary (a few dozen records across both editions), enough for examples
//! and tests. The published CPV has roughly 17,800 records; point [`CodeRegistry::new`] at a
//! directory holding a full `cpvCodes.json` and `cpvMappings.json` to use it.
//!
//! Display names come from a [`cpv_translation::Translator`]; without one, entries carry their
//! canonical English label.

mod dataset;
mod error;
pub mod mappings;
pub mod registry;

pub use crate::error::{DataLoadError, DataLoadErrorExt};
pub use crate::mappings::LegacyMappingIndex;
pub use crate::registry::{BUNDLED_DATASET, CodeRegistry, Entries};
