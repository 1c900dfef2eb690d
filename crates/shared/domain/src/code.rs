//! CPV code records and the entries built from them.

use crate::hierarchy::{self, Level};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric discriminant that names no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDiscriminant {
    pub kind: &'static str,
    pub value: u8,
}

impl fmt::Display for UnknownDiscriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownDiscriminant {}

/// Kind of procurement a code describes. Serialized as `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CodeType {
    Supply = 1,
    Works = 2,
    Services = 3,
}

impl TryFrom<u8> for CodeType {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Supply),
            2 => Ok(Self::Works),
            3 => Ok(Self::Services),
            value => Err(UnknownDiscriminant { kind: "code type", value }),
        }
    }
}

impl From<CodeType> for u8 {
    fn from(value: CodeType) -> Self {
        value as Self
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Supply => "supply",
            Self::Works => "works",
            Self::Services => "services",
        })
    }
}

/// Edition of the classification. `V1` is the 2003 vocabulary, `V2` the 2008 one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Version {
    V1 = 1,
    #[default]
    V2 = 2,
}

impl TryFrom<u8> for Version {
    type Error = UnknownDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            value => Err(UnknownDiscriminant { kind: "version", value }),
        }
    }
}

impl From<Version> for u8 {
    fn from(value: Version) -> Self {
        value as Self
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Accepts `1`, `2`, `v1` and `v2` (case-insensitive).
impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['v', 'V']).unwrap_or(s);
        digits
            .parse::<u8>()
            .map_err(|_| format!("invalid version '{s}'"))
            .and_then(|n| Self::try_from(n).map_err(|e| e.to_string()))
    }
}

/// Composite key of a code within a versioned dataset: `"{code}_{version}"`.
///
/// ```
/// use cpv_domain::{code_version, Version};
///
/// assert_eq!(code_version("03000000-1", Version::V2), "03000000-1_2");
/// ```
#[must_use]
pub fn code_version(code: &str, version: Version) -> String {
    format!("{code}_{version}")
}

/// One record of the dataset file, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRecord {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub code_type: CodeType,
    pub numeric_code: u32,
    #[serde(default)]
    pub version: Version,
    #[serde(default)]
    pub parent: Option<String>,
}

/// A code as handed to callers: the stored record plus its display name in the active locale.
///
/// Entries are built on every access and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEntry {
    name: String,
    local_name: String,
    #[serde(rename = "type")]
    code_type: CodeType,
    code: String,
    numeric_code: u32,
    version: Version,
    parent_code: Option<String>,
    code_version: String,
}

impl CodeEntry {
    #[must_use]
    pub fn new(record: CodeRecord, local_name: impl Into<String>) -> Self {
        let code_version = code_version(&record.code, record.version);
        Self {
            name: record.name,
            local_name: local_name.into(),
            code_type: record.code_type,
            code: record.code,
            numeric_code: record.numeric_code,
            version: record.version,
            parent_code: record.parent,
            code_version,
        }
    }

    /// Canonical (English) label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label in the locale that was active when the entry was built.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    #[must_use]
    pub const fn code_type(&self) -> CodeType {
        self.code_type
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn numeric_code(&self) -> u32 {
        self.numeric_code
    }

    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// `None` for divisions.
    #[must_use]
    pub fn parent_code(&self) -> Option<&str> {
        self.parent_code.as_deref()
    }

    #[must_use]
    pub fn code_version(&self) -> &str {
        &self.code_version
    }

    #[must_use]
    pub fn short_code(&self) -> String {
        hierarchy::short_code(&self.code)
    }

    #[must_use]
    pub fn division(&self) -> String {
        hierarchy::division(&self.code)
    }

    #[must_use]
    pub fn group(&self) -> String {
        hierarchy::group(&self.code)
    }

    #[must_use]
    pub fn class(&self) -> String {
        hierarchy::class(&self.code)
    }

    #[must_use]
    pub fn category(&self) -> String {
        hierarchy::category(&self.code)
    }

    #[must_use]
    pub fn is_division(&self) -> bool {
        hierarchy::is_division(&self.code)
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        hierarchy::is_group(&self.code)
    }

    #[must_use]
    pub fn is_class(&self) -> bool {
        hierarchy::is_class(&self.code)
    }

    #[must_use]
    pub fn is_category(&self) -> bool {
        hierarchy::is_category(&self.code)
    }

    #[must_use]
    pub fn is_subcategory(&self) -> bool {
        hierarchy::is_subcategory(&self.code)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        hierarchy::level(&self.code)
    }
}
