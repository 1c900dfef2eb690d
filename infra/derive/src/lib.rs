#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the CPV workspace crates.
//!
//! Only one macro lives here today: [`macro@cpv_error`], which every crate uses to declare
//! its error enum.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! cpv-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, SourceError>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<SourceError>` for variants with a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
/// * **Formatting Helper**: Emits a module-local `format_context` function for use inside
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants with a source must include `context: Option<Cow<'static, str>>`.
/// 3. Tuple and unit variants are rejected.
/// 4. One annotated enum per module, since `format_context` is generated at module scope.
///
/// # Example
///
/// ```rust,ignore
/// use cpv_derive::cpv_error;
/// use std::borrow::Cow;
///
/// #[cpv_error]
/// pub enum DataLoadError {
///     #[error("Malformed dataset{}: {source}", format_context(.context))]
///     Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(bytes: &[u8]) -> Result<Vec<Record>, DataLoadError> {
///     serde_json::from_slice(bytes).context("Parsing cpvCodes.json")
/// }
/// ```
#[proc_macro_attribute]
pub fn cpv_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
