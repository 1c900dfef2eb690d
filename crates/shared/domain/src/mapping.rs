//! Links between codes of the two vocabulary editions.

use crate::code::{Version, code_version};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A versioned reference to a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeRef {
    pub code: String,
    pub version: Version,
}

impl CodeRef {
    #[must_use]
    pub fn new(code: impl Into<String>, version: Version) -> Self {
        Self { code: code.into(), version }
    }

    #[must_use]
    pub fn code_version(&self) -> String {
        code_version(&self.code, self.version)
    }
}

impl fmt::Display for CodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (v{})", self.code, self.version)
    }
}

/// One record of the mapping file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMapping {
    pub source_code: String,
    pub source_version: Version,
    pub target_code: String,
    pub target_version: Version,
}

impl LegacyMapping {
    #[must_use]
    pub fn source_key(&self) -> String {
        code_version(&self.source_code, self.source_version)
    }

    #[must_use]
    pub fn target(&self) -> CodeRef {
        CodeRef::new(self.target_code.clone(), self.target_version)
    }
}
