//! Route file discovery.
//!
//! The walk is the only part of the system that touches the filesystem at
//! startup. It yields relative paths in a deterministic order, which the
//! table builder uses as the final specificity tie-break.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ServeError;

/// Extensions a route file may have unless configured otherwise.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "js", "jsx", "tsx"];

/// Resolves the operator-supplied root directory string.
///
/// Strips a `file://` scheme prefix and rejects relative paths: a relative
/// root silently depends on the process working directory.
///
/// # Examples
///
/// ```
/// use waymark_server::discover::normalize_root_dir;
///
/// let root = normalize_root_dir("file:///srv/pages").unwrap();
/// assert_eq!(root, std::path::PathBuf::from("/srv/pages"));
///
/// assert!(normalize_root_dir("pages").is_err());
/// ```
pub fn normalize_root_dir(root_dir: &str) -> Result<PathBuf, ServeError> {
    let trimmed = root_dir.strip_prefix("file://").unwrap_or(root_dir);
    let path = Path::new(trimmed);

    if !path.is_absolute() {
        return Err(ServeError::RootDirRelative(root_dir.to_string()));
    }

    debug!(from = root_dir, to = %path.display(), "normalized root dir");
    Ok(path.to_path_buf())
}

/// Walks `root_dir` and returns every route-eligible file as a path
/// relative to the root.
///
/// Directories are skipped; only files whose extension is in `extensions`
/// qualify. Entries come back sorted by file name so the discovery order
/// is stable across runs.
pub fn discover_routes(root_dir: &Path, extensions: &[String]) -> Result<Vec<String>, ServeError> {
    if !root_dir.is_dir() {
        return Err(ServeError::RootDirNotFound(root_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root_dir).sort_by_file_name() {
        let entry = entry.map_err(|source| ServeError::Walk {
            root: root_dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let eligible = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false);
        if !eligible {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root_dir) {
            files.push(relative.to_string_lossy().into_owned());
        }
    }

    debug!(root = %root_dir.display(), count = files.len(), "discovered route files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_roots() {
        let err = normalize_root_dir("pages").unwrap_err();
        assert!(matches!(err, ServeError::RootDirRelative(_)));
    }

    #[test]
    fn strips_file_scheme() {
        let root = normalize_root_dir("file:///var/www/pages").unwrap();
        assert_eq!(root, PathBuf::from("/var/www/pages"));
    }

    #[test]
    fn missing_root_is_reported() {
        let err = discover_routes(
            Path::new("/nonexistent/waymark-test-root"),
            &["ts".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, ServeError::RootDirNotFound(_)));
    }
}
