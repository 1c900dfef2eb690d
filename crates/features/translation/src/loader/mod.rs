//! Catalog sources for [`NativeTranslator`](crate::NativeTranslator).

pub mod json;
pub mod memory;

use crate::locale::normalize_locale;
use fxhash::FxHashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Canonical label to localized label, for one `(domain, locale)` pair.
pub type Catalog = FxHashMap<String, String>;

/// A source of translation catalogs.
///
/// Loading never fails: an absent or unusable catalog is an empty one.
pub trait TranslationLoader: Send + Sync + Debug {
    /// Catalog of `domain` for `locale`. When no catalog exists for the locale as given,
    /// the normalized locale (`de_DE` -> `de`) is tried next.
    fn load(&self, locale: &str, domain: &str) -> Arc<Catalog>;

    /// Locales that have a catalog for `domain`, sorted.
    fn available_locales(&self, domain: &str) -> Vec<String>;

    /// Whether the normalized `locale` has a catalog for `domain`.
    fn supports(&self, locale: &str, domain: &str) -> bool {
        let normalized = normalize_locale(locale);
        self.available_locales(domain).iter().any(|available| *available == normalized)
    }
}

/// Cache key shared by the loaders.
type CatalogKey = (String, String);

fn catalog_key(domain: &str, locale: &str) -> CatalogKey {
    (domain.to_owned(), locale.to_owned())
}
