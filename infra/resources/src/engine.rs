//! The [`ResourceDir`] handle: a read-only view of one directory on disk.

use crate::error::ResourceError;
use crate::security;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Shared state behind a [`ResourceDir`].
#[derive(Debug)]
pub struct ResourceDirInner {
    /// Root of the sandbox, canonicalized when it existed at construction time.
    pub(crate) root: PathBuf,
}

/// A cheap-to-clone, thread-safe handle to a read-only resource directory.
///
/// Every name passed in is resolved relative to the root and rejected if it would leave it,
/// either lexically (`../x`, `/etc/x`) or through a symlink.
///
/// # Example
///
/// ```rust
/// use cpv_resources::{ResourceDir, ResourceError};
///
/// # fn main() -> Result<(), ResourceError> {
/// # let tmp = tempfile::tempdir().unwrap();
/// # std::fs::write(tmp.path().join("cpvCodes.json"), b"[]").unwrap();
/// let resources = ResourceDir::open(tmp.path());
///
/// assert!(resources.exists("cpvCodes.json")?);
/// assert_eq!(resources.read("cpvCodes.json")?, b"[]");
/// assert!(resources.read("../outside.json").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceDir {
    pub(crate) inner: Arc<ResourceDirInner>,
}

impl Deref for ResourceDir {
    type Target = ResourceDirInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ResourceDir {
    /// Opens `root`. The directory does not have to exist yet; reads then fail with
    /// [`ResourceError::FileNotFound`] until it does.
    ///
    /// A relative root is anchored to the current directory once, here.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = root.canonicalize().or_else(|_| std::path::absolute(&root)).unwrap_or(root);
        debug!(root = %root.display(), "Resource directory opened");
        Self { inner: Arc::new(ResourceDirInner { root }) }
    }

    /// The physical root of this directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` to a physical path inside the root.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathTraversalAttempt`] if `name` is absolute, empty or escapes the root.
    pub fn resolve(&self, name: impl AsRef<Path>) -> Result<PathBuf, ResourceError> {
        security::resolve(&self.root, name)
    }

    /// Reads the whole file `name`.
    ///
    /// # Errors
    ///
    /// * [`ResourceError::PathTraversalAttempt`] for names outside the sandbox.
    /// * [`ResourceError::FileNotFound`] if nothing exists at `name`.
    /// * [`ResourceError::Io`] for any other read failure.
    pub fn read(&self, name: impl AsRef<Path>) -> Result<Vec<u8>, ResourceError> {
        let resolved = self.resolve(name)?;

        match std::fs::read(&resolved) {
            Ok(bytes) => {
                trace!(path = %resolved.display(), len = bytes.len(), "Resource read");
                Ok(bytes)
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResourceError::FileNotFound { message: resolved.display().to_string().into(), context: None })
            },
            Err(e) => Err(ResourceError::Io {
                source: e,
                context: Some(format!("Read failed: {}", resolved.display()).into()),
            }),
        }
    }

    /// Whether `name` exists and is a regular file.
    ///
    /// # Errors
    ///
    /// Only if `name` fails sandbox validation.
    pub fn exists(&self, name: impl AsRef<Path>) -> Result<bool, ResourceError> {
        Ok(self.resolve(name)?.is_file())
    }

    /// File names directly under the root that start with `prefix` and end with `suffix`,
    /// sorted.
    ///
    /// # Errors
    ///
    /// * [`ResourceError::DirectoryNotFound`] if the root does not exist.
    /// * [`ResourceError::Io`] if the directory cannot be walked.
    pub fn list(&self, prefix: &str, suffix: &str) -> Result<Vec<String>, ResourceError> {
        if !self.root.is_dir() {
            return Err(ResourceError::DirectoryNotFound {
                message: self.root.display().to_string().into(),
                context: None,
            });
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ResourceError::Io {
                source: e.into(),
                context: Some(format!("Listing {}", self.root.display()).into()),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
            {
                names.push(name.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
