//! Load-once storage shared by [`CodeRegistry`](crate::CodeRegistry) and
//! [`LegacyMappingIndex`](crate::LegacyMappingIndex).
//!
//! Both pieces of lazy state follow the same single-flight discipline: a read lock serves the
//! loaded value, the first caller to miss takes the write lock, checks again and loads while
//! holding it. Concurrent callers wait on the lock instead of loading a second time. A failed
//! load leaves the slot empty.

use crate::error::{DataLoadError, DataLoadErrorExt};
use cpv_domain::{CodeRecord, LegacyMapping};
use cpv_resources::ResourceDir;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// Composite key to position in the dataset.
pub(crate) type KeyIndex = FxHashMap<String, usize>;

/// A dataset record with the minimum checks needed to build values from it.
pub(crate) trait Record: DeserializeOwned + Debug + Send + Sync {
    fn check(&self) -> Result<(), Cow<'static, str>>;
}

impl Record for CodeRecord {
    fn check(&self) -> Result<(), Cow<'static, str>> {
        if self.code.is_empty() {
            return Err(format!("'{}' has an empty code", self.name).into());
        }
        Ok(())
    }
}

impl Record for LegacyMapping {
    fn check(&self) -> Result<(), Cow<'static, str>> {
        if self.source_code.is_empty() || self.target_code.is_empty() {
            return Err("mapping with an empty code".into());
        }
        Ok(())
    }
}

/// A JSON array file read into memory on first use and kept immutable afterwards.
#[derive(Debug)]
pub(crate) struct Dataset<T> {
    resources: ResourceDir,
    file: &'static str,
    records: RwLock<Option<Arc<[T]>>>,
    loads: AtomicUsize,
}

impl<T: Record> Dataset<T> {
    pub(crate) fn new(resources: ResourceDir, file: &'static str) -> Self {
        Self { resources, file, records: RwLock::new(None), loads: AtomicUsize::new(0) }
    }

    pub(crate) fn root(&self) -> &Path {
        self.resources.root()
    }

    pub(crate) fn get(&self) -> Result<Arc<[T]>, DataLoadError> {
        if let Some(records) = self.records.read().as_ref() {
            return Ok(Arc::clone(records));
        }

        let mut slot = self.records.write();
        if let Some(records) = slot.as_ref() {
            return Ok(Arc::clone(records));
        }

        let records = self.read()?;
        *slot = Some(Arc::clone(&records));
        Ok(records)
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.records.read().is_some()
    }

    /// Number of attempts to read the file so far.
    pub(crate) fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    fn read(&self) -> Result<Arc<[T]>, DataLoadError> {
        self.loads.fetch_add(1, Ordering::Relaxed);

        let bytes = self.resources.read(self.file).context(self.file)?;
        let records: Vec<T> = serde_json::from_slice(&bytes).context(self.file)?;

        for (position, record) in records.iter().enumerate() {
            record.check().map_err(|message| DataLoadError::InvalidRecord {
                message,
                context: Some(format!("{} record #{position}", self.file).into()),
            })?;
        }

        info!(file = self.file, root = %self.root().display(), records = records.len(), "Dataset loaded");
        Ok(records.into())
    }
}

/// A key index over a [`Dataset`], built once on first use.
#[derive(Debug, Default)]
pub(crate) struct LazyIndex {
    index: RwLock<Option<Arc<KeyIndex>>>,
    builds: AtomicUsize,
}

impl LazyIndex {
    pub(crate) fn get_or_build<T>(&self, records: &[T], key: impl Fn(&T) -> String) -> Arc<KeyIndex> {
        if let Some(index) = self.index.read().as_ref() {
            return Arc::clone(index);
        }

        let mut slot = self.index.write();
        if let Some(index) = slot.as_ref() {
            return Arc::clone(index);
        }

        self.builds.fetch_add(1, Ordering::Relaxed);
        let mut index = KeyIndex::with_capacity_and_hasher(records.len(), Default::default());
        for (position, record) in records.iter().enumerate() {
            let key = key(record);
            if let Some(previous) = index.get(&key) {
                warn!(key = %key, previous, position, "Duplicate key in dataset, the later record wins");
            }
            index.insert(key, position);
        }
        debug!(keys = index.len(), records = records.len(), "Index built");

        let index = Arc::new(index);
        *slot = Some(Arc::clone(&index));
        index
    }

    pub(crate) fn is_built(&self) -> bool {
        self.index.read().is_some()
    }

    pub(crate) fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
