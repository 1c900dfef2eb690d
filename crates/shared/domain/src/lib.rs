//! # Domain Models
//!
//! This crate contains pure CPV domain types with a single dependency (`serde`).
//! Keep it lean: no I/O and no translation logic, just data and the hierarchy arithmetic
//! every other crate agrees on.

pub mod code;
pub mod config;
pub mod constants;
pub mod hierarchy;
pub mod mapping;

pub use crate::code::{CodeEntry, CodeRecord, CodeType, UnknownDiscriminant, Version, code_version};
pub use crate::hierarchy::Level;
pub use crate::mapping::{CodeRef, LegacyMapping};
