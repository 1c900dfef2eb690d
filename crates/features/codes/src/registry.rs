//! The CPV code registry.

use crate::dataset::{Dataset, LazyIndex};
use crate::error::DataLoadError;
use cpv_domain::constants::{CODES_FILE, DEFAULT_DOMAIN};
use cpv_domain::{CodeEntry, CodeRecord, Version, code_version};
use cpv_resources::ResourceDir;
use cpv_translation::{NullTranslator, Translator};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Directory of the sample dataset shipped with this crate.
///
/// It holds a few dozen records of both editions, not the full vocabulary; pass a root to
/// [`CodeRegistry::new`] for real data.
pub const BUNDLED_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");

/// Read-only registry over `cpvCodes.json`.
///
/// Nothing is read until the first operation that needs records; the `(code, version)`
/// index is built on the first [`CodeRegistry::lookup`]. Entries are built on every access,
/// with `local_name` resolved through the registry's translator at that moment.
///
/// # Example
///
/// ```rust
/// use cpv_codes::CodeRegistry;
/// use cpv_domain::Version;
///
/// # fn main() -> Result<(), cpv_codes::DataLoadError> {
/// let registry = CodeRegistry::new(None, None);
///
/// let entry = registry.lookup("31532700-1", Version::V2)?.expect("bundled code");
/// assert_eq!(entry.name(), "Lamp covers");
/// assert_eq!(entry.short_code(), "315327");
///
/// assert_eq!(registry.iterate()?.count(), registry.count()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CodeRegistry {
    dataset: Dataset<CodeRecord>,
    index: LazyIndex,
    translator: Arc<dyn Translator>,
    domain: Arc<str>,
}

impl CodeRegistry {
    /// `root` defaults to the sample [`BUNDLED_DATASET`], `translator` to [`NullTranslator`].
    pub fn new(root: Option<PathBuf>, translator: Option<Arc<dyn Translator>>) -> Self {
        let root = root.unwrap_or_else(|| PathBuf::from(BUNDLED_DATASET));
        let translator: Arc<dyn Translator> = match translator {
            Some(translator) => translator,
            None => Arc::new(NullTranslator),
        };
        Self {
            dataset: Dataset::new(ResourceDir::open(root), CODES_FILE),
            index: LazyIndex::default(),
            translator,
            domain: Arc::from(DEFAULT_DOMAIN),
        }
    }

    /// Translation domain used for `local_name`.
    #[must_use = "The registry is returned with the domain applied."]
    pub fn with_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.domain = Arc::from(domain.as_ref());
        self
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dataset.root()
    }

    #[must_use]
    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    /// All entries in storage order.
    ///
    /// # Errors
    /// [`DataLoadError`] if the dataset cannot be loaded.
    pub fn iterate(&self) -> Result<Entries, DataLoadError> {
        Ok(Entries {
            records: self.dataset.get()?,
            translator: Arc::clone(&self.translator),
            domain: Arc::clone(&self.domain),
            position: 0,
        })
    }

    /// # Errors
    /// [`DataLoadError`] if the dataset cannot be loaded.
    pub fn count(&self) -> Result<usize, DataLoadError> {
        Ok(self.dataset.get()?.len())
    }

    /// The entry for `code` in `version`, if the dataset has one.
    ///
    /// # Errors
    /// [`DataLoadError`] if the dataset cannot be loaded.
    pub fn lookup(&self, code: &str, version: Version) -> Result<Option<CodeEntry>, DataLoadError> {
        let records = self.dataset.get()?;
        let index = self.index.get_or_build(&records, |record| code_version(&record.code, record.version));

        let position = index.get(&code_version(code, version)).copied();
        trace!(code, %version, found = position.is_some(), "Code lookup");
        Ok(position.map(|position| build_entry(&records[position], self.translator.as_ref(), &self.domain)))
    }

    /// # Errors
    /// [`DataLoadError`] if the dataset cannot be loaded.
    pub fn to_list(&self) -> Result<Vec<CodeEntry>, DataLoadError> {
        Ok(self.iterate()?.collect())
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_loaded()
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.index.is_built()
    }
}

fn build_entry(record: &CodeRecord, translator: &dyn Translator, domain: &str) -> CodeEntry {
    let local_name = translator.translate(&record.name, None, domain);
    CodeEntry::new(record.clone(), local_name)
}

/// Iterator over a loaded dataset, yielding freshly built [`CodeEntry`] values.
///
/// It owns a handle on the loaded records, so it stays valid independently of the registry.
/// [`Entries::rewind`] restarts it without touching the dataset file.
#[derive(Debug, Clone)]
pub struct Entries {
    records: Arc<[CodeRecord]>,
    translator: Arc<dyn Translator>,
    domain: Arc<str>,
    position: usize,
}

impl Entries {
    /// Zero-based position of the next entry.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn rewind(&mut self) {
        self.position = 0;
    }
}

impl Iterator for Entries {
    type Item = CodeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.position)?;
        self.position += 1;
        Some(build_entry(record, self.translator.as_ref(), &self.domain))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.position = self.position.saturating_add(n);
        self.next()
    }
}

impl ExactSizeIterator for Entries {}

impl FusedIterator for Entries {}
