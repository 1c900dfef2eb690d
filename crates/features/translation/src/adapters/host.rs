//! Bridge to an application's own translation service.

use crate::{LocaleAware, Translator};
use cpv_domain::constants::DEFAULT_LOCALE;
use std::fmt::Debug;

/// What a host i18n service has to offer for [`HostTranslator`].
pub trait HostCatalog: Send + Sync + Debug {
    /// Message stored under `key` for `locale`. Hosts conventionally echo `key` back on a miss.
    fn get(&self, key: &str, locale: &str) -> String;

    /// Message stored under `id` in the catalog `domain`, for hosts that keep one catalog per
    /// domain. Used by [`HostTranslator::plain_keys`]; defaults to [`HostCatalog::get`] on `id`.
    fn get_in_domain(&self, id: &str, domain: &str, locale: &str) -> String {
        let _ = domain;
        self.get(id, locale)
    }

    fn set_locale(&self, locale: &str);

    fn locale(&self) -> String;
}

/// Delegates lookups to a [`HostCatalog`].
///
/// Labels are requested under `"{domain}.{id}"`, or `"{namespace}::{domain}.{id}"` when a
/// namespace is set. With [`HostTranslator::plain_keys`] the raw `id` is requested from the
/// `domain` catalog instead. An empty answer or the key itself counts as a miss and yields `id`.
/// Without a host it behaves like [`NullTranslator`](crate::NullTranslator).
#[derive(Debug)]
pub struct HostTranslator<H> {
    host: Option<H>,
    namespace: Option<String>,
    plain_keys: bool,
}

impl<H: HostCatalog> HostTranslator<H> {
    pub const fn new(host: H) -> Self {
        Self { host: Some(host), namespace: None, plain_keys: false }
    }

    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { host: None, namespace: None, plain_keys: false }
    }

    #[must_use = "The translator is returned with the namespace applied."]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Asks the host for the bare `id` in the `domain` catalog through
    /// [`HostCatalog::get_in_domain`]. The namespace is ignored in this mode.
    #[must_use = "The translator is returned with plain keys enabled."]
    pub const fn plain_keys(mut self) -> Self {
        self.plain_keys = true;
        self
    }

    #[must_use]
    pub const fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    fn key(&self, id: &str, domain: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}::{domain}.{id}"),
            None => format!("{domain}.{id}"),
        }
    }
}

impl<H: HostCatalog> Translator for HostTranslator<H> {
    fn translate(&self, id: &str, locale: Option<&str>, domain: &str) -> String {
        let Some(host) = &self.host else {
            return id.to_owned();
        };

        let locale = locale.map_or_else(|| host.locale(), str::to_owned);
        let (key, translated) = if self.plain_keys {
            (id.to_owned(), host.get_in_domain(id, domain, &locale))
        } else {
            let key = self.key(id, domain);
            let translated = host.get(&key, &locale);
            (key, translated)
        };

        if translated.is_empty() || translated == key { id.to_owned() } else { translated }
    }

    fn as_locale_aware(&self) -> Option<&dyn LocaleAware> {
        Some(self)
    }
}

impl<H: HostCatalog> LocaleAware for HostTranslator<H> {
    fn set_locale(&self, locale: &str) {
        if let Some(host) = &self.host {
            host.set_locale(locale);
        }
    }

    fn locale(&self) -> String {
        self.host.as_ref().map_or_else(|| DEFAULT_LOCALE.to_owned(), HostCatalog::locale)
    }

    fn available_locales(&self) -> Vec<String> {
        Vec::new()
    }
}
