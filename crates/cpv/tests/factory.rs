use cpv::domain::config::{RegistryConfig, TranslatorKind};
use cpv::prelude::*;
use std::fs;
use tempfile::tempdir;

fn native(locale: &str, fallback: &str) -> RegistryFactory {
    let translator = NativeTranslator::builder().locale(locale).fallback_locale(fallback).build();
    RegistryFactory::new().translator(Arc::new(translator))
}

fn local_name(factory: &RegistryFactory, code: &str) -> String {
    factory.codes().lookup(code, Version::V2).unwrap().unwrap().local_name().to_owned()
}

#[test]
fn lamp_covers_scenario() {
    let entry = RegistryFactory::new().codes().lookup("31532700-1", Version::default()).unwrap().unwrap();

    assert_eq!(entry.code(), "31532700-1");
    assert_eq!(u8::from(entry.version()), 2);
    assert_eq!(entry.code_type(), CodeType::Supply);
    assert_eq!(entry.numeric_code(), 31_532_700);
    assert_eq!(entry.name(), "Lamp covers");
    assert_eq!(entry.short_code(), "315327");
    assert_eq!(entry.division(), "31");
    assert!(!entry.is_division());
}

#[test]
fn division_scenario() {
    let entry = RegistryFactory::new().codes().lookup("03000000-1", Version::V2).unwrap().unwrap();

    assert_eq!(entry.short_code(), "03");
    assert!(entry.is_division());
    assert!(entry.parent_code().is_none());
}

#[test]
fn translation_scenarios() {
    assert_eq!(local_name(&native("de", "en"), "31532700-1"), "Lampenabdeckungen");
    assert_eq!(local_name(&native("fr", "en"), "31532700-1"), "Écran protecteur de lampe");
    assert_eq!(local_name(&native("xx", "de"), "31532700-1"), "Lampenabdeckungen");
    assert_eq!(local_name(&native("xx", "en"), "31532700-1"), "Lamp covers");
}

#[test]
fn codes_and_mappings_share_the_dataset_root() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("cpvCodes.json"),
        r#"[{"name":"Seeds","code":"03111000-2","type":1,"numericCode":3111000,"version":2,"parent":null}]"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("cpvMappings.json"),
        r#"[{"sourceCode":"03111000-2","sourceVersion":2,"targetCode":"01111000-1","targetVersion":1}]"#,
    )
    .unwrap();
    let factory = RegistryFactory::new().dataset_root(tmp.path());

    assert_eq!(factory.codes().count().unwrap(), 1);
    let target = factory.mappings().get_mapping("03111000-2", Version::V2).unwrap().unwrap();
    assert_eq!(target, CodeRef::new("01111000-1", Version::V1));
}

#[test]
fn registries_share_the_translator() {
    let factory = native("de", "en");
    let first = factory.codes();
    let second = factory.codes();

    first.translator().as_locale_aware().unwrap().set_locale("fr");
    let entry = second.lookup("03451300-9", Version::V2).unwrap().unwrap();
    assert_eq!(entry.local_name(), "Arbustes");
    assert!(!first.is_loaded());
}

#[test]
fn config_selects_backend_locale_and_domain() {
    let mut config = RegistryConfig::default();
    config.translation.backend = TranslatorKind::Native;
    config.translation.locale = "es".to_owned();
    let factory = RegistryFactory::from_config(&config);
    assert_eq!(local_name(&factory, "03451300-9"), "Arbustos");

    config.translation.backend = TranslatorKind::Null;
    let factory = RegistryFactory::from_config(&config);
    assert_eq!(local_name(&factory, "03451300-9"), "Shrubs");

    config.translation.domain = "procurement".to_owned();
    assert_eq!(RegistryFactory::from_config(&config).codes().domain(), "procurement");
}

#[test]
fn config_translation_root_replaces_bundled_catalogs() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("cpvCodes.it.json"), r#"{"Shrubs":"Arbusti"}"#).unwrap();

    let mut config = RegistryConfig::default();
    config.translation.backend = TranslatorKind::Native;
    config.translation.locale = "it".to_owned();
    config.translation.root = Some(tmp.path().to_path_buf());

    assert_eq!(local_name(&RegistryFactory::from_config(&config), "03451300-9"), "Arbusti");
}
