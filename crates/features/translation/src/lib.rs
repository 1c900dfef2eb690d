//! # Translation
//!
//! Turns canonical CPV labels into display names for a locale.
//!
//! ## Architecture
//!
//! 1.  **Capabilities ([`Translator`], [`LocaleAware`]):** what the registry consumes. A
//!     translator never fails; a miss returns the label unchanged.
//! 2.  **Adapters ([`adapters`]):** [`NullTranslator`] (identity), [`NativeTranslator`]
//!     (catalog lookup with a fallback locale) and [`HostTranslator`] (delegates to an
//!     application's own i18n service through [`HostCatalog`]).
//! 3.  **Loaders ([`loader`]):** where [`NativeTranslator`] gets its catalogs from.
//!     [`JsonFileLoader`] reads `{domain}.{locale}.json` files and ships German, French and
//!     Spanish catalogs; [`MemoryLoader`] holds catalogs built in code.
//!
//! ## Example
//!
//! ```rust
//! use cpv_translation::{NativeTranslator, Translator};
//!
//! let translator = NativeTranslator::builder().locale("de").build();
//! assert_eq!(translator.translate("Lamp covers", None, "cpvCodes"), "Lampenabdeckungen");
//! assert_eq!(translator.translate("Lamp covers", Some("xx"), "cpvCodes"), "Lamp covers");
//! ```

pub mod adapters;
mod error;
pub mod loader;
pub mod locale;

pub use crate::adapters::host::{HostCatalog, HostTranslator};
pub use crate::adapters::native::{NativeTranslator, NativeTranslatorBuilder};
pub use crate::adapters::null::NullTranslator;
pub use crate::error::{TranslationError, TranslationErrorExt};
pub use crate::loader::json::JsonFileLoader;
pub use crate::loader::memory::MemoryLoader;
pub use crate::loader::{Catalog, TranslationLoader};
pub use crate::locale::normalize_locale;

use cpv_domain::constants::DEFAULT_DOMAIN;
use std::fmt::Debug;

/// Resolves a canonical label to its display name.
pub trait Translator: Send + Sync + Debug {
    /// Display name of `id` in `locale` (the translator's current locale when `None`),
    /// looked up in `domain`. Returns `id` itself when nothing matches.
    fn translate(&self, id: &str, locale: Option<&str>, domain: &str) -> String;

    /// [`Translator::translate`] in the current locale and the `cpvCodes` domain.
    fn translate_default(&self, id: &str) -> String {
        self.translate(id, None, DEFAULT_DOMAIN)
    }

    /// Locale controls, for translators that have them.
    fn as_locale_aware(&self) -> Option<&dyn LocaleAware> {
        None
    }
}

/// Runtime control over a translator's current locale.
pub trait LocaleAware: Send + Sync {
    fn set_locale(&self, locale: &str);

    fn locale(&self) -> String;

    /// Locales this translator has catalogs for. Empty when it cannot tell.
    fn available_locales(&self) -> Vec<String>;
}
