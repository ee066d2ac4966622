//! Routing event sink.
//!
//! The engine never writes to a global logger. Anything worth reporting is
//! handed to a [`RouteObserver`] that the host attaches when the table is
//! built; the observer is read-only for the life of the table.

use std::path::Path;

use crate::route::Params;

/// How a request path was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Hit in the exact map.
    Exact,
    /// Hit during the ordered parameterized scan.
    Scan,
}

/// Snapshot of a freshly built route table.
#[derive(Debug, Clone)]
pub struct TableSummary {
    /// Total routes in the table.
    pub total: usize,
    /// Routes in the exact map.
    pub exact: usize,
    /// Parameterized patterns in the order the dispatcher scans them.
    pub scan_order: Vec<String>,
}

/// One successful dispatch.
#[derive(Debug)]
pub struct MatchTrace<'a> {
    /// The normalized request path.
    pub url_path: &'a str,
    /// The winning pattern.
    pub pattern: &'a str,
    /// Source file the pattern was derived from.
    pub file: &'a Path,
    /// Parameters bound by the match.
    pub params: &'a Params,
    /// Whether the exact map or the ordered scan resolved it.
    pub kind: MatchKind,
}

/// Sink for structured routing events.
///
/// All hooks default to no-ops, so an implementation only handles the
/// events it cares about.
pub trait RouteObserver: Send + Sync {
    /// The table finished building.
    fn table_built(&self, _summary: &TableSummary) {}

    /// A request path resolved to a route.
    fn matched(&self, _trace: &MatchTrace<'_>) {}

    /// A request path matched nothing.
    fn no_match(&self, _url_path: &str) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RouteObserver for NoopObserver {}
