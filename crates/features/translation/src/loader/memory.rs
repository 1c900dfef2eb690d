//! Catalogs assembled in code.

use super::{Catalog, CatalogKey, TranslationLoader, catalog_key};
use crate::locale::normalize_locale;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory catalogs, for embedding applications and tests.
///
/// ```
/// use cpv_translation::{MemoryLoader, TranslationLoader};
///
/// let loader = MemoryLoader::new().with_catalog("cpvCodes", "it", [("Shrubs", "Arbusti")]);
/// assert_eq!(loader.load("it_IT", "cpvCodes")["Shrubs"], "Arbusti");
/// assert!(loader.supports("it-CH", "cpvCodes"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLoader {
    catalogs: RwLock<FxHashMap<CatalogKey, Arc<Catalog>>>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "The loader is returned with the catalog added."]
    pub fn with_catalog<K, V>(self, domain: &str, locale: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(domain, locale, entries);
        self
    }

    /// Merges `entries` into the catalog of `(domain, locale)`.
    pub fn insert<K, V>(&self, domain: &str, locale: &str, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalogs = self.catalogs.write();
        let catalog = catalogs.entry(catalog_key(domain, locale)).or_default();
        Arc::make_mut(catalog).extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl TranslationLoader for MemoryLoader {
    fn load(&self, locale: &str, domain: &str) -> Arc<Catalog> {
        let catalogs = self.catalogs.read();
        catalogs
            .get(&catalog_key(domain, locale))
            .or_else(|| catalogs.get(&catalog_key(domain, &normalize_locale(locale))))
            .map(Arc::clone)
            .unwrap_or_default()
    }

    fn available_locales(&self, domain: &str) -> Vec<String> {
        let mut locales: Vec<String> = self
            .catalogs
            .read()
            .keys()
            .filter(|(catalog_domain, _)| catalog_domain == domain)
            .map(|(_, locale)| locale.clone())
            .collect();
        locales.sort_unstable();
        locales
    }
}
