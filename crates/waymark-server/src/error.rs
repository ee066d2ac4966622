//! Startup and request-boundary error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-time failures: these abort startup with an operator-facing
/// message. Request-time outcomes (not-found, handler failures) never
/// appear here; they are resolved inside the request boundary.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The root directory does not exist or is not a directory.
    #[error("root directory {} could not be found", .0.display())]
    RootDirNotFound(PathBuf),

    /// A relative root depends on the process working directory, which is a
    /// configuration bug rather than something to guess about.
    #[error("root directory {0} is a relative path - provide an absolute path")]
    RootDirRelative(String),

    /// The walk itself failed partway, e.g. on an unreadable subdirectory.
    #[error("failed to walk {}", .root.display())]
    Walk {
        /// The root directory being walked.
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Table construction rejected the discovered file set.
    #[error(transparent)]
    Build(#[from] waymark_router::BuildError),
}

/// Failures resolving a matched route to an invocable handler.
///
/// Surfaced as a request-level internal error response; a bad handler never
/// takes down the router or other in-flight requests.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry has nothing for the matched route.
    #[error("no handler registered for {0}")]
    HandlerMissing(String),

    /// The registry resolved something that is not invocable as a handler.
    #[error("handler for {0} violates the handler contract: {1}")]
    HandlerContractViolation(String, String),
}
