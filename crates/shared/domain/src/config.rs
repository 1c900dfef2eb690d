use crate::constants::{DEFAULT_DOMAIN, DEFAULT_FALLBACK_LOCALE, DEFAULT_LOCALE};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level registry configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfigInner {
    /// Directory holding `cpvCodes.json` and `cpvMappings.json`. `None` means the bundled sample dataset.
    pub dataset_root: Option<PathBuf>,
    pub translation: TranslationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    #[serde(flatten, default)]
    inner: Arc<RegistryConfigInner>,
}

impl Deref for RegistryConfig {
    type Target = RegistryConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RegistryConfig {
    fn deref_mut(&mut self) -> &mut RegistryConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Which translator backend the factory builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorKind {
    /// Canonical labels only.
    #[default]
    Null,
    /// JSON catalogs per locale.
    Native,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub backend: TranslatorKind,
    pub locale: String,
    pub fallback_locale: String,
    pub domain: String,
    /// Catalog directory. `None` means the bundled catalogs.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            backend: TranslatorKind::default(),
            locale: DEFAULT_LOCALE.to_owned(),
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_owned(),
            domain: DEFAULT_DOMAIN.to_owned(),
            root: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false, path: None }
    }
}
