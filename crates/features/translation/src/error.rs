use cpv_resources::ResourceError;
use std::borrow::Cow;

/// Reasons a catalog could not be read. Loaders log these and fall back to an empty catalog.
#[cpv_derive::cpv_error]
pub enum TranslationError {
    #[error("Catalog unavailable{}: {source}", format_context(.context))]
    Resource { source: ResourceError, context: Option<Cow<'static, str>> },

    #[error("Malformed catalog{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
