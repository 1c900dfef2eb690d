//! Catalog-backed translator with a fallback locale.

use crate::loader::TranslationLoader;
use crate::loader::json::JsonFileLoader;
use crate::{LocaleAware, Translator};
use cpv_domain::constants::{DEFAULT_DOMAIN, DEFAULT_FALLBACK_LOCALE, DEFAULT_LOCALE};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Looks labels up in catalogs provided by a [`TranslationLoader`].
///
/// Resolution for `translate(id, locale, domain)`:
/// 1. the catalog of `locale` (or the current locale),
/// 2. the catalog of the fallback locale, unless it is the locale from step 1,
/// 3. `id` itself.
#[derive(Debug)]
pub struct NativeTranslator {
    loader: Arc<dyn TranslationLoader>,
    locale: RwLock<String>,
    fallback_locale: RwLock<String>,
}

/// Builder for [`NativeTranslator`]. Without a loader or base path, the bundled catalogs are used.
#[derive(Debug, Default)]
pub struct NativeTranslatorBuilder {
    loader: Option<Arc<dyn TranslationLoader>>,
    locale: Option<String>,
    fallback_locale: Option<String>,
    base_path: Option<PathBuf>,
}

impl NativeTranslatorBuilder {
    /// Catalog source. Takes precedence over [`NativeTranslatorBuilder::base_path`].
    #[must_use = "The builder must be configured before it can be used to build the translator."]
    pub fn loader(mut self, loader: Arc<dyn TranslationLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    #[must_use = "The builder must be configured before it can be used to build the translator."]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to build the translator."]
    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    /// Directory of `{domain}.{locale}.json` catalogs.
    #[must_use = "The builder must be configured before it can be used to build the translator."]
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn build(self) -> NativeTranslator {
        let loader: Arc<dyn TranslationLoader> = match (self.loader, self.base_path) {
            (Some(loader), _) => loader,
            (None, Some(path)) => Arc::new(JsonFileLoader::new(path)),
            (None, None) => Arc::new(JsonFileLoader::bundled()),
        };

        NativeTranslator {
            loader,
            locale: RwLock::new(self.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_owned())),
            fallback_locale: RwLock::new(self.fallback_locale.unwrap_or_else(|| DEFAULT_FALLBACK_LOCALE.to_owned())),
        }
    }
}

impl NativeTranslator {
    #[must_use = "The builder must be configured before it can be used to build the translator."]
    pub fn builder() -> NativeTranslatorBuilder {
        NativeTranslatorBuilder::default()
    }

    /// Bundled catalogs, locale and fallback `en`.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn set_fallback_locale(&self, locale: &str) {
        locale.clone_into(&mut self.fallback_locale.write());
    }

    #[must_use]
    pub fn fallback_locale(&self) -> String {
        self.fallback_locale.read().clone()
    }

    #[must_use]
    pub fn loader(&self) -> &Arc<dyn TranslationLoader> {
        &self.loader
    }
}

impl Default for NativeTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for NativeTranslator {
    fn translate(&self, id: &str, locale: Option<&str>, domain: &str) -> String {
        let target = locale.map_or_else(|| self.locale(), str::to_owned);

        if let Some(found) = self.loader.load(&target, domain).get(id) {
            return found.clone();
        }

        let fallback = self.fallback_locale();
        if target != fallback
            && let Some(found) = self.loader.load(&fallback, domain).get(id)
        {
            return found.clone();
        }

        id.to_owned()
    }

    fn as_locale_aware(&self) -> Option<&dyn LocaleAware> {
        Some(self)
    }
}

impl LocaleAware for NativeTranslator {
    fn set_locale(&self, locale: &str) {
        locale.clone_into(&mut self.locale.write());
    }

    fn locale(&self) -> String {
        self.locale.read().clone()
    }

    fn available_locales(&self) -> Vec<String> {
        self.loader.available_locales(DEFAULT_DOMAIN)
    }
}
