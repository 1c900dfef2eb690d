//! Catalogs stored as flat JSON objects, one file per domain and locale.

use super::{Catalog, CatalogKey, TranslationLoader, catalog_key};
use crate::error::{TranslationError, TranslationErrorExt};
use crate::locale::normalize_locale;
use cpv_resources::{ResourceDir, ResourceError};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};

const CATALOG_SUFFIX: &str = ".json";

/// Catalogs shipped with this crate (`de`, `fr`, `es` for the `cpvCodes` domain).
pub const BUNDLED_TRANSLATIONS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/translations");

/// Reads `{base}/{domain}.{locale}.json`.
///
/// Every catalog is read at most once per loader; later changes on disk are not observed.
#[derive(Debug)]
pub struct JsonFileLoader {
    resources: ResourceDir,
    catalogs: RwLock<FxHashMap<CatalogKey, Arc<Catalog>>>,
    locales: RwLock<FxHashMap<String, Arc<[String]>>>,
}

impl JsonFileLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            resources: ResourceDir::open(base),
            catalogs: RwLock::new(FxHashMap::default()),
            locales: RwLock::new(FxHashMap::default()),
        }
    }

    /// Loader over [`BUNDLED_TRANSLATIONS`].
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BUNDLED_TRANSLATIONS)
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        self.resources.root()
    }

    fn read_catalog(&self, locale: &str, domain: &str) -> Result<Catalog, TranslationError> {
        let normalized = normalize_locale(locale);
        let candidates = if normalized == locale { vec![locale] } else { vec![locale, normalized.as_str()] };

        for candidate in candidates {
            let name = format!("{domain}.{candidate}{CATALOG_SUFFIX}");
            if !self.resources.exists(&name)? {
                continue;
            }
            let bytes = self.resources.read(&name)?;
            let catalog: Catalog = serde_json::from_slice(&bytes).context(name)?;
            debug!(domain, locale = candidate, entries = catalog.len(), "Translation catalog loaded");
            return Ok(catalog);
        }

        debug!(domain, locale, "No translation catalog");
        Ok(Catalog::default())
    }
}

impl Default for JsonFileLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

impl TranslationLoader for JsonFileLoader {
    fn load(&self, locale: &str, domain: &str) -> Arc<Catalog> {
        let key = catalog_key(domain, locale);
        if let Some(catalog) = self.catalogs.read().get(&key) {
            trace!(domain, locale, "Translation catalog cache hit");
            return Arc::clone(catalog);
        }

        let catalog = self.read_catalog(locale, domain).unwrap_or_else(|e| {
            warn!(domain, locale, error = %e, "Translation catalog unusable, using an empty one");
            Catalog::default()
        });

        Arc::clone(self.catalogs.write().entry(key).or_insert_with(|| Arc::new(catalog)))
    }

    fn available_locales(&self, domain: &str) -> Vec<String> {
        if let Some(locales) = self.locales.read().get(domain) {
            return locales.to_vec();
        }

        let prefix = format!("{domain}.");
        let locales: Vec<String> = match self.resources.list(&prefix, CATALOG_SUFFIX) {
            Ok(files) => files
                .iter()
                .filter_map(|file| file.strip_prefix(&prefix)?.strip_suffix(CATALOG_SUFFIX))
                .filter(|locale| !locale.is_empty())
                .map(str::to_owned)
                .collect(),
            Err(ResourceError::DirectoryNotFound { .. }) => Vec::new(),
            Err(e) => {
                warn!(domain, error = %e, "Cannot enumerate translation catalogs");
                Vec::new()
            },
        };

        let locales: Arc<[String]> = locales.into();
        self.locales.write().entry(domain.to_owned()).or_insert(locales).to_vec()
    }
}
