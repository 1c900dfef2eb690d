use cpv_resources::{ResourceDir, ResourceError};
use std::fs;
use tempfile::tempdir;

fn setup() -> (tempfile::TempDir, ResourceDir) {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("resources");
    fs::create_dir_all(root.join("translations")).unwrap();
    fs::write(root.join("cpvCodes.json"), br#"[{"code":"03000000-1"}]"#).unwrap();
    fs::write(root.join("cpvMappings.json"), b"[]").unwrap();
    fs::write(root.join("translations/cpvCodes.de.json"), b"{}").unwrap();
    fs::write(tmp.path().join("secret.json"), b"top secret").unwrap();
    let resources = ResourceDir::open(&root);
    (tmp, resources)
}

#[test]
fn reads_files_inside_the_root() {
    let (_tmp, resources) = setup();

    assert_eq!(resources.read("cpvCodes.json").unwrap(), br#"[{"code":"03000000-1"}]"#);
    assert_eq!(resources.read("translations/cpvCodes.de.json").unwrap(), b"{}");
    assert_eq!(resources.read("translations/../cpvMappings.json").unwrap(), b"[]");
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let (_tmp, resources) = setup();

    let err = resources.read("cpvCodes.xx.json").unwrap_err();
    assert!(matches!(err, ResourceError::FileNotFound { .. }), "{err}");
    assert!(!resources.exists("cpvCodes.xx.json").unwrap());
    assert!(resources.exists("cpvCodes.json").unwrap());
    assert!(!resources.exists("translations").unwrap());
}

#[test]
fn traversal_is_blocked() {
    let (_tmp, resources) = setup();

    for name in ["../secret.json", "translations/../../secret.json", "/etc/passwd", ""] {
        let err = resources.read(name).unwrap_err();
        assert!(matches!(err, ResourceError::PathTraversalAttempt { .. }), "{name}: {err}");
    }
    assert!(resources.exists("../secret.json").is_err());
}

#[cfg(unix)]
#[test]
fn symlink_out_of_the_root_is_blocked() {
    let (tmp, resources) = setup();
    std::os::unix::fs::symlink(tmp.path(), resources.root().join("escape")).unwrap();

    let err = resources.read("escape/secret.json").unwrap_err();
    assert!(matches!(err, ResourceError::PathTraversalAttempt { .. }), "{err}");
}

#[test]
fn list_filters_top_level_files() {
    let (_tmp, resources) = setup();
    fs::write(resources.root().join("cpvCodes.es.json"), b"{}").unwrap();

    assert_eq!(resources.list("cpv", ".json").unwrap(), ["cpvCodes.es.json", "cpvCodes.json", "cpvMappings.json"]);
    assert_eq!(resources.list("cpvCodes.", ".json").unwrap(), ["cpvCodes.es.json", "cpvCodes.json"]);
    assert!(resources.list("nothing", ".json").unwrap().is_empty());
}

#[test]
fn list_on_missing_root_fails() {
    let tmp = tempdir().unwrap();
    let resources = ResourceDir::open(tmp.path().join("absent"));

    assert!(matches!(resources.list("", ".json"), Err(ResourceError::DirectoryNotFound { .. })));
    assert!(matches!(resources.read("cpvCodes.json"), Err(ResourceError::FileNotFound { .. })));
}

#[test]
fn relative_root_created_after_open_is_readable() {
    let cwd_tmp = tempfile::tempdir_in(".").unwrap();
    let root = cwd_tmp.path().join("data");
    assert!(root.is_relative());

    let resources = ResourceDir::open(&root);
    assert!(resources.root().is_absolute());
    assert!(matches!(resources.read("cpvCodes.json"), Err(ResourceError::FileNotFound { .. })));

    fs::create_dir(&root).unwrap();
    fs::write(root.join("cpvCodes.json"), b"[]").unwrap();

    assert_eq!(resources.read("cpvCodes.json").unwrap(), b"[]");
    assert!(resources.exists("cpvCodes.json").unwrap());
    assert!(resources.read("../outside.json").is_err());
}

#[cfg(unix)]
#[test]
fn root_linked_after_open_is_readable() {
    let tmp = tempdir().unwrap();
    let real = tmp.path().join("real");
    let link = tmp.path().join("link");
    let resources = ResourceDir::open(&link);

    fs::create_dir(&real).unwrap();
    fs::write(real.join("cpvCodes.json"), b"[]").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    assert_eq!(resources.read("cpvCodes.json").unwrap(), b"[]");
    assert!(resources.exists("cpvCodes.json").unwrap());
}
