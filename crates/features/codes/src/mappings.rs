//! Links from current codes to their predecessors in the older vocabulary edition.

use crate::dataset::{Dataset, LazyIndex};
use crate::error::DataLoadError;
use crate::registry::BUNDLED_DATASET;
use cpv_domain::constants::MAPPINGS_FILE;
use cpv_domain::{CodeRef, LegacyMapping, Version, code_version};
use cpv_resources::ResourceDir;
use std::path::{Path, PathBuf};

/// Read-only index over `cpvMappings.json`, loaded and indexed on first use.
///
/// ```rust
/// use cpv_codes::LegacyMappingIndex;
/// use cpv_domain::Version;
///
/// let mappings = LegacyMappingIndex::new(None);
/// let target = mappings.get_mapping("03000000-1", Version::V2).unwrap().unwrap();
/// assert_eq!((target.code.as_str(), target.version), ("01000000-7", Version::V1));
/// ```
#[derive(Debug)]
pub struct LegacyMappingIndex {
    dataset: Dataset<LegacyMapping>,
    index: LazyIndex,
}

impl LegacyMappingIndex {
    /// `root` defaults to [`BUNDLED_DATASET`].
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        let root = root.unwrap_or_else(|| PathBuf::from(BUNDLED_DATASET));
        Self { dataset: Dataset::new(ResourceDir::open(root), MAPPINGS_FILE), index: LazyIndex::default() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dataset.root()
    }

    /// Target of the mapping whose source is `code` in `version`.
    ///
    /// # Errors
    /// [`DataLoadError`] if the mapping file cannot be loaded.
    pub fn get_mapping(&self, code: &str, version: Version) -> Result<Option<CodeRef>, DataLoadError> {
        let records = self.dataset.get()?;
        let index = self.index.get_or_build(&records, LegacyMapping::source_key);
        Ok(index.get(&code_version(code, version)).map(|&position| records[position].target()))
    }

    /// # Errors
    /// [`DataLoadError`] if the mapping file cannot be loaded.
    pub fn count(&self) -> Result<usize, DataLoadError> {
        Ok(self.dataset.get()?.len())
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_loaded()
    }
}
