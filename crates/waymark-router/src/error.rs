//! Errors raised while assembling a route table.

use std::path::PathBuf;

use thiserror::Error;

/// Table construction failures.
///
/// These are configuration-time conditions: they abort startup and are
/// never produced by dispatch. A failed match at request time is a normal
/// outcome, not an error.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The discovery walk produced zero eligible files. An empty router is
    /// never served silently; the host decides whether this is fatal.
    #[error("no routes discovered under {}", .root.display())]
    NoRoutesDiscovered {
        /// The root directory that was walked.
        root: PathBuf,
    },

    /// The pattern combines a catch-all with an optional segment, a
    /// combination with no defined matching behavior.
    #[error("unsupported pattern {} (from {}): an optional segment cannot be combined with a catch-all", .pattern, .file.display())]
    UnsupportedPattern {
        /// The rendered pattern.
        pattern: String,
        /// The file it was derived from.
        file: PathBuf,
    },
}
