use crate::error::ResourceError;
use std::path::{Component, Path, PathBuf};

/// Collapses `.` and `..` lexically. A `..` that would climb above the resource root is rejected.
fn normalize_relative(path: &Path) -> Result<PathBuf, ResourceError> {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::Normal(segment) => out.push(segment),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(traversal(path, "'..' climbs above the resource root"));
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(traversal(path, "absolute resource names are not allowed"));
            },
        }
    }

    if out.as_os_str().is_empty() {
        return Err(traversal(path, "empty resource name"));
    }

    Ok(out)
}

/// Joins `name` onto `root` and guarantees the result stays inside `root`, following symlinks
/// of whatever part of the path already exists.
///
/// The root is canonicalized on every call: it may have been created, or linked elsewhere,
/// after the [`ResourceDir`](crate::ResourceDir) was opened.
pub(crate) fn resolve(root: &Path, name: impl AsRef<Path>) -> Result<PathBuf, ResourceError> {
    let name = name.as_ref();
    let relative = normalize_relative(name)?;
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let root = root.as_path();
    let joined = root.join(relative);

    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(canonical) => Err(traversal(&canonical, "resolved outside the resource root")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => check_ancestors(root, joined),
        Err(e) => Err(ResourceError::Io { source: e, context: Some(name.display().to_string().into()) }),
    }
}

/// A missing resource is still checked: its nearest existing ancestor must live inside `root`.
fn check_ancestors(root: &Path, joined: PathBuf) -> Result<PathBuf, ResourceError> {
    let mut current = joined.parent();

    while let Some(dir) = current {
        if dir == root || !dir.starts_with(root) {
            break;
        }
        if dir.exists() {
            return match dir.canonicalize() {
                Ok(canonical) if canonical.starts_with(root) => Ok(joined),
                Ok(canonical) => Err(traversal(&canonical, "parent directory links outside the resource root")),
                Err(e) => Err(ResourceError::Io { source: e, context: Some("Verifying parent directory".into()) }),
            };
        }
        current = dir.parent();
    }

    Ok(joined)
}

fn traversal(path: &Path, reason: &'static str) -> ResourceError {
    ResourceError::PathTraversalAttempt { message: path.display().to_string().into(), context: Some(reason.into()) }
}
