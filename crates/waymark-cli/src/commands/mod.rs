pub mod routes;
pub mod serve;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Resolves an operator-typed directory against the working directory.
///
/// The server layer rejects relative roots outright; the CLI is the one
/// place where resolving against the working directory is what the
/// operator meant, so it happens here, explicitly, before anything else
/// sees the path.
pub(crate) fn resolve_dir(dir: &str) -> Result<PathBuf> {
    let path = Path::new(dir);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
