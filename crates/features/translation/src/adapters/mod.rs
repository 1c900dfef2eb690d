//! [`Translator`](crate::Translator) implementations.

pub mod host;
pub mod native;
pub mod null;
