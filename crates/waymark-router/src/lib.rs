//! # Waymark Router
//!
//! Derives an HTTP routing table from the layout of files on disk and
//! dispatches request paths against it:
//! - Static routes (`about.ts` → `/about`)
//! - Index files (`blog/index.ts` → `/blog`)
//! - Dynamic parameters (`blog/[id].ts` → `/blog/[id]`)
//! - Catch-all routes (`docs/[...path].ts` → `/docs/[...path]`)
//! - Optional trailing parameters (`archive/[[page]].ts`)
//!
//! The table is built once from a finite file set and is immutable
//! afterwards; dispatch is a pure read safe to share across concurrent
//! request tasks. Patterns without parameters resolve through an O(1)
//! exact map, the rest through a linear scan in specificity order, so the
//! most literally-specific pattern always wins.
//!
//! This crate is the engine only. Walking the filesystem, loading handler
//! code, and producing HTTP responses belong to the host; the engine
//! reports events through an injected [`RouteObserver`] and signals
//! not-found by returning `None`.
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//! use waymark_router::RouteTable;
//!
//! let table = RouteTable::build(
//!     ["index.ts", "about.ts", "blog/[id].ts", "[fallback].ts"],
//!     Path::new("/srv/pages"),
//! )
//! .unwrap();
//!
//! let hit = table.dispatch("/about").unwrap();
//! assert_eq!(hit.route.pattern(), "/about");
//!
//! let hit = table.dispatch("/blog/42").unwrap();
//! assert_eq!(hit.params.get("id"), Some(&"42".to_string()));
//!
//! let hit = table.dispatch("/anything-else").unwrap();
//! assert_eq!(hit.params.get("fallback"), Some(&"anything-else".to_string()));
//! ```

mod error;
mod observer;
pub mod path;
pub mod route;
mod table;

pub use error::BuildError;
pub use observer::{MatchKind, MatchTrace, NoopObserver, RouteObserver, TableSummary};
pub use path::{is_canonical_path, normalize_path};
pub use route::{classify_segment, Params, RoutePattern, Segment};
pub use table::{RouteMatch, RouteTable, RouteTableBuilder};
