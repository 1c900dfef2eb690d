use crate::{LocaleAware, Translator};
use cpv_domain::constants::DEFAULT_LOCALE;

/// Returns every label unchanged. Used when no translator is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullTranslator;

impl Translator for NullTranslator {
    fn translate(&self, id: &str, _locale: Option<&str>, _domain: &str) -> String {
        id.to_owned()
    }

    fn as_locale_aware(&self) -> Option<&dyn LocaleAware> {
        Some(self)
    }
}

impl LocaleAware for NullTranslator {
    fn set_locale(&self, _locale: &str) {}

    fn locale(&self) -> String {
        DEFAULT_LOCALE.to_owned()
    }

    fn available_locales(&self) -> Vec<String> {
        vec![DEFAULT_LOCALE.to_owned()]
    }
}
