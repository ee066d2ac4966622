//! # Waymark Server
//!
//! The serving layer around [`waymark_router`]: everything the routing
//! engine treats as an external collaborator lives here.
//!
//! - [`discover`] walks the root directory and normalizes the operator's
//!   root-dir string.
//! - [`config`] reads `waymark.toml`.
//! - [`registry`] resolves matched routes to invocable handlers.
//! - [`serve`] glues it all into an `axum::Router` built once at startup.
//! - [`observer`] forwards routing events to `tracing`.
//!
//! Startup errors (missing root, relative root, empty route set) abort
//! with an operator-facing message. Request-time outcomes - not-found and
//! handler failures - stay inside the request boundary.

pub mod config;
pub mod discover;
pub mod error;
pub mod observer;
pub mod registry;
pub mod serve;

pub use config::Config;
pub use discover::{discover_routes, normalize_root_dir, DEFAULT_EXTENSIONS};
pub use error::{RegistryError, ServeError};
pub use observer::TracingObserver;
pub use registry::{FnRegistry, Handler, HandlerRegistry, PreviewRegistry};
pub use serve::{ServerBuilder, WaymarkServer};
