use cpv_domain::config::{LoggingConfig, RegistryConfig, TranslationConfig, TranslatorKind};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let translation = TranslationConfig::default();
    assert_eq!(translation.backend, TranslatorKind::Null);
    assert_eq!(translation.locale, "en");
    assert_eq!(translation.fallback_locale, "en");
    assert_eq!(translation.domain, "cpvCodes");
    assert!(translation.root.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert!(!logging.json);

    let config = RegistryConfig::default();
    assert!(config.dataset_root.is_none());
}

#[test]
fn registry_config_deserializes_partial_documents() {
    let raw = json!({
        "dataset_root": "/srv/cpv",
        "translation": { "backend": "native", "locale": "de_DE" },
        "logging": { "json": true }
    });

    let cfg: RegistryConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.dataset_root, Some(PathBuf::from("/srv/cpv")));
    assert_eq!(cfg.translation.backend, TranslatorKind::Native);
    assert_eq!(cfg.translation.locale, "de_DE");
    assert_eq!(cfg.translation.fallback_locale, "en");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
fn unknown_backend_is_rejected() {
    let raw = json!({ "translation": { "backend": "gettext" } });
    assert!(serde_json::from_value::<RegistryConfig>(raw).is_err());
}

#[test]
fn deref_mut_clones_on_write() {
    let shared = RegistryConfig::default();
    let mut local = shared.clone();
    local.translation.locale = "fr".to_owned();

    assert_eq!(shared.translation.locale, "en");
    assert_eq!(local.translation.locale, "fr");
}
