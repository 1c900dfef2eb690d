use cpv_codes::{CodeRegistry, DataLoadError, LegacyMappingIndex};
use cpv_domain::{CodeType, Level, Version};
use cpv_translation::{MemoryLoader, NativeTranslator, Translator};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn german() -> Arc<dyn Translator> {
    Arc::new(NativeTranslator::builder().locale("de").build())
}

#[test]
fn lamp_covers_is_a_supply_subcategory() {
    let registry = CodeRegistry::new(None, None);
    let entry = registry.lookup("31532700-1", Version::V2).unwrap().unwrap();

    assert_eq!(entry.code_type(), CodeType::Supply);
    assert_eq!(entry.numeric_code(), 31_532_700);
    assert_eq!(entry.name(), "Lamp covers");
    assert_eq!(entry.local_name(), "Lamp covers");
    assert_eq!(entry.short_code(), "315327");
    assert_eq!(entry.parent_code(), Some("31532000-4"));
    assert_eq!(entry.version(), Version::V2);
    assert!(entry.is_category());
    assert!(entry.is_subcategory());
}

#[test]
fn hierarchy_levels_of_bundled_codes() {
    let registry = CodeRegistry::new(None, None);
    let lookup = |code| registry.lookup(code, Version::V2).unwrap().unwrap();

    let division = lookup("03000000-1");
    assert!(division.is_division());
    assert_eq!(division.division(), "03");
    assert_eq!(division.parent_code(), None);

    assert_eq!(lookup("03100000-2").group(), "031");
    assert!(lookup("03100000-2").is_group());
    assert_eq!(lookup("03110000-5").class(), "0311");
    assert!(lookup("03110000-5").is_class());

    let category = lookup("03111000-2");
    assert_eq!(category.category(), "03111");
    assert!(category.is_category());
    assert!(!category.is_subcategory());
    assert_eq!(category.level(), Level::Category);

    let shrubs = lookup("03451300-9");
    assert_eq!(shrubs.name(), "Shrubs");
    assert_eq!(shrubs.numeric_code(), 3_451_300);
    assert_eq!(shrubs.short_code(), "034513");
}

#[test]
fn code_types_of_top_level_divisions() {
    let registry = CodeRegistry::new(None, None);
    let code_type = |code| registry.lookup(code, Version::V2).unwrap().unwrap().code_type();

    assert_eq!(code_type("45000000-7"), CodeType::Works);
    assert_eq!(code_type("50000000-5"), CodeType::Services);
    assert_eq!(code_type("03000000-1"), CodeType::Supply);
}

#[test]
fn unknown_code_or_version_is_none() {
    let registry = CodeRegistry::new(None, None);

    assert!(registry.lookup("99999999-9", Version::V2).unwrap().is_none());
    assert!(registry.lookup("31532700-1", Version::V1).unwrap().is_none());
    assert!(registry.lookup("", Version::V2).unwrap().is_none());
}

#[test]
fn same_code_in_both_editions_is_two_entries() {
    let registry = CodeRegistry::new(None, None);

    let current = registry.lookup("45000000-7", Version::V2).unwrap().unwrap();
    let legacy = registry.lookup("45000000-7", Version::V1).unwrap().unwrap();
    assert_eq!(current.code_version(), "45000000-7_2");
    assert_eq!(legacy.code_version(), "45000000-7_1");
}

#[test]
fn iteration_matches_count_and_lookup() {
    let registry = CodeRegistry::new(None, None);
    let entries = registry.to_list().unwrap();

    assert_eq!(entries.len(), registry.count().unwrap());
    assert_eq!(registry.iterate().unwrap().len(), entries.len());

    let keys: HashSet<_> = entries.iter().map(|e| e.code_version().to_owned()).collect();
    assert_eq!(keys.len(), entries.len());

    for entry in &entries {
        let found = registry.lookup(entry.code(), entry.version()).unwrap().unwrap();
        assert_eq!(&found, entry);
        assert_eq!(entry.code_version(), format!("{}_{}", entry.code(), u8::from(entry.version())));
    }
}

#[test]
fn every_parent_is_in_the_dataset() {
    let registry = CodeRegistry::new(None, None);

    for entry in registry.iterate().unwrap() {
        if let Some(parent) = entry.parent_code() {
            assert!(registry.lookup(parent, entry.version()).unwrap().is_some(), "{parent} of {}", entry.code());
        }
    }
}

#[test]
fn local_names_follow_the_translator() {
    let registry = CodeRegistry::new(None, Some(german()));
    let entry = registry.lookup("31532700-1", Version::V2).unwrap().unwrap();
    assert_eq!(entry.name(), "Lamp covers");
    assert_eq!(entry.local_name(), "Lampenabdeckungen");

    registry.translator().as_locale_aware().unwrap().set_locale("fr");
    let entry = registry.lookup("31532700-1", Version::V2).unwrap().unwrap();
    assert_eq!(entry.local_name(), "Écran protecteur de lampe");
}

#[test]
fn custom_domain_is_passed_to_the_translator() {
    let loader = MemoryLoader::new()
        .with_catalog("cpvCodes", "it", [("Wood", "Legno")])
        .with_catalog("procurement", "it", [("Wood", "Legname")]);
    let translator: Arc<dyn Translator> =
        Arc::new(NativeTranslator::builder().loader(Arc::new(loader)).locale("it").build());

    let default_domain = CodeRegistry::new(None, Some(Arc::clone(&translator)));
    let custom_domain = CodeRegistry::new(None, Some(translator)).with_domain("procurement");

    assert_eq!(default_domain.domain(), "cpvCodes");
    assert_eq!(default_domain.lookup("03410000-7", Version::V2).unwrap().unwrap().local_name(), "Legno");
    assert_eq!(custom_domain.lookup("03410000-7", Version::V2).unwrap().unwrap().local_name(), "Legname");
}

fn write_dataset(dir: &Path, body: &str) {
    fs::write(dir.join("cpvCodes.json"), body).unwrap();
}

#[test]
fn malformed_dataset_is_an_error() {
    let tmp = tempdir().unwrap();
    write_dataset(tmp.path(), r#"[{"name":"Wood","code":"03410000-7""#);
    let registry = CodeRegistry::new(Some(tmp.path().to_path_buf()), None);

    assert!(matches!(registry.count(), Err(DataLoadError::Malformed { .. })));
    assert!(matches!(registry.to_list(), Err(DataLoadError::Malformed { .. })));
}

#[test]
fn unknown_code_type_is_an_error() {
    let tmp = tempdir().unwrap();
    write_dataset(tmp.path(), r#"[{"name":"Wood","code":"03410000-7","type":9,"numericCode":3410000,"version":2}]"#);
    let registry = CodeRegistry::new(Some(tmp.path().to_path_buf()), None);

    let err = registry.lookup("03410000-7", Version::V2).unwrap_err();
    assert!(matches!(err, DataLoadError::Malformed { .. }), "{err}");
    assert!(err.to_string().contains("cpvCodes.json"), "{err}");
}

#[test]
fn duplicate_code_keeps_the_later_record() {
    let tmp = tempdir().unwrap();
    write_dataset(
        tmp.path(),
        r#"[
            {"name":"Wood","code":"03410000-7","type":1,"numericCode":3410000,"version":2,"parent":"03400000-4"},
            {"name":"Timber","code":"03410000-7","type":1,"numericCode":3410000,"version":2,"parent":"03400000-4"}
        ]"#,
    );
    let registry = CodeRegistry::new(Some(tmp.path().to_path_buf()), None);

    assert_eq!(registry.lookup("03410000-7", Version::V2).unwrap().unwrap().name(), "Timber");
    assert_eq!(registry.count().unwrap(), 2);
}

#[test]
fn relative_root_created_after_a_failed_load_is_retried() {
    let cwd_tmp = tempfile::tempdir_in(".").unwrap();
    let root = cwd_tmp.path().join("data");
    let registry = CodeRegistry::new(Some(root.clone()), None);

    assert!(matches!(registry.count(), Err(DataLoadError::Resource { .. })));
    assert!(!registry.is_loaded());

    fs::create_dir(&root).unwrap();
    write_dataset(&root, r#"[{"name":"Wood","code":"03410000-7","type":1,"numericCode":3410000,"version":2}]"#);

    assert_eq!(registry.count().unwrap(), 1);
    assert_eq!(registry.lookup("03410000-7", Version::V2).unwrap().unwrap().name(), "Wood");
}

#[test]
fn mappings_point_to_the_older_edition() {
    let mappings = LegacyMappingIndex::new(None);

    let target = mappings.get_mapping("03000000-1", Version::V2).unwrap().unwrap();
    assert_eq!(target.code, "01000000-7");
    assert_eq!(target.version, Version::V1);

    assert!(mappings.get_mapping("03100000-2", Version::V2).unwrap().is_some());
    assert!(mappings.get_mapping("03000000-1", Version::V1).unwrap().is_none());
    assert!(mappings.get_mapping("31532700-1", Version::V2).unwrap().is_none());
}

#[test]
fn mapping_targets_exist_in_the_registry() {
    let registry = CodeRegistry::new(None, None);
    let mappings = LegacyMappingIndex::new(None);

    for source in registry.iterate().unwrap() {
        if let Some(target) = mappings.get_mapping(source.code(), source.version()).unwrap() {
            assert!(registry.lookup(&target.code, target.version).unwrap().is_some(), "{target}");
        }
    }
}

#[test]
fn missing_mapping_file_is_an_error() {
    let tmp = tempdir().unwrap();
    let mappings = LegacyMappingIndex::new(Some(tmp.path().to_path_buf()));

    assert!(matches!(mappings.get_mapping("03000000-1", Version::V2), Err(DataLoadError::Resource { .. })));
    assert!(!mappings.is_loaded());
}
