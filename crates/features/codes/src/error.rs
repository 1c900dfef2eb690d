use cpv_resources::ResourceError;
use std::borrow::Cow;

/// A specialized [`DataLoadError`] enum of this crate.
///
/// Any of these means the dataset could not be turned into records. It is returned from
/// every registry operation until a later attempt succeeds.
#[cpv_derive::cpv_error]
pub enum DataLoadError {
    #[error("Dataset unavailable{}: {source}", format_context(.context))]
    Resource { source: ResourceError, context: Option<Cow<'static, str>> },

    #[error("Malformed dataset{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid record{}: {message}", format_context(.context))]
    InvalidRecord { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
