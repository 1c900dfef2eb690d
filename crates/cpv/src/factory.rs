use cpv_codes::{CodeRegistry, LegacyMappingIndex};
use cpv_domain::config::{RegistryConfig, TranslatorKind};
use cpv_domain::constants::DEFAULT_DOMAIN;
use cpv_translation::{NativeTranslator, NullTranslator, Translator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Builds registries that share one dataset root, translator and translation domain.
///
/// Each call to [`RegistryFactory::codes`] or [`RegistryFactory::mappings`] returns a new,
/// not yet loaded index; the translator is shared, so changing its locale affects all of them.
#[derive(Debug, Clone)]
pub struct RegistryFactory {
    dataset_root: Option<PathBuf>,
    translator: Arc<dyn Translator>,
    domain: String,
}

impl RegistryFactory {
    /// Bundled dataset, [`NullTranslator`], `cpvCodes` domain.
    #[must_use]
    pub fn new() -> Self {
        Self { dataset_root: None, translator: Arc::new(NullTranslator), domain: DEFAULT_DOMAIN.to_owned() }
    }

    /// Factory described by `config`: dataset root, translator backend with its locales,
    /// catalog directory and domain.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        let translation = &config.translation;
        let translator: Arc<dyn Translator> = match translation.backend {
            TranslatorKind::Null => Arc::new(NullTranslator),
            TranslatorKind::Native => {
                let mut builder = NativeTranslator::builder()
                    .locale(translation.locale.as_str())
                    .fallback_locale(translation.fallback_locale.as_str());
                if let Some(root) = &translation.root {
                    builder = builder.base_path(root);
                }
                Arc::new(builder.build())
            },
        };

        debug!(
            backend = ?translation.backend,
            locale = %translation.locale,
            domain = %translation.domain,
            "Registry factory configured"
        );

        Self { dataset_root: config.dataset_root.clone(), translator, domain: translation.domain.clone() }
    }

    /// Directory holding `cpvCodes.json` and `cpvMappings.json`.
    #[must_use = "The factory is returned with the dataset root applied."]
    pub fn dataset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.dataset_root = Some(root.into());
        self
    }

    #[must_use = "The factory is returned with the translator applied."]
    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    #[must_use = "The factory is returned with the domain applied."]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    #[must_use]
    pub fn codes(&self) -> CodeRegistry {
        CodeRegistry::new(self.dataset_root.clone(), Some(Arc::clone(&self.translator))).with_domain(&self.domain)
    }

    #[must_use]
    pub fn mappings(&self) -> LegacyMappingIndex {
        LegacyMappingIndex::new(self.dataset_root.clone())
    }
}

impl Default for RegistryFactory {
    fn default() -> Self {
        Self::new()
    }
}
