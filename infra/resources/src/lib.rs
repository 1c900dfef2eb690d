//! Sandboxed, read-only access to resource directories.
//!
//! Datasets and translation catalogs are plain files under a root directory that may be
//! supplied by the user. [`ResourceDir`] makes sure that names derived from user input
//! (a locale, a translation domain) can never reach outside that root.
//!
//! ```rust
//! use cpv_resources::{ResourceDir, ResourceError};
//!
//! # let tmp = tempfile::tempdir().unwrap();
//! # std::fs::write(tmp.path().join("cpvCodes.de.json"), b"{}").unwrap();
//! # std::fs::write(tmp.path().join("cpvCodes.fr.json"), b"{}").unwrap();
//! let resources = ResourceDir::open(tmp.path());
//! let catalogs = resources.list("cpvCodes.", ".json").unwrap();
//! assert_eq!(catalogs, ["cpvCodes.de.json", "cpvCodes.fr.json"]);
//!
//! let err = resources.read("../../etc/passwd").unwrap_err();
//! assert!(matches!(err, ResourceError::PathTraversalAttempt { .. }));
//! ```

mod engine;
mod error;
mod security;

pub use crate::engine::{ResourceDir, ResourceDirInner};
pub use crate::error::{ResourceError, ResourceErrorExt};
