//! Routing observer backed by `tracing`.

use tracing::{debug, info};
use waymark_router::{MatchTrace, RouteObserver, TableSummary};

/// Forwards routing events to the active `tracing` subscriber.
///
/// The discovery summary lands at info; the scan order and per-request
/// match traces at debug, so they only show up when an operator asks for
/// them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RouteObserver for TracingObserver {
    fn table_built(&self, summary: &TableSummary) {
        info!(
            total = summary.total,
            exact = summary.exact,
            parameterized = summary.scan_order.len(),
            "route table built"
        );
        debug!(scan_order = ?summary.scan_order, "parameterized scan order");
    }

    fn matched(&self, trace: &MatchTrace<'_>) {
        debug!(
            url = trace.url_path,
            pattern = trace.pattern,
            file = %trace.file.display(),
            params = ?trace.params,
            kind = ?trace.kind,
            "matched route"
        );
    }

    fn no_match(&self, url_path: &str) {
        debug!(url = url_path, "no route matched");
    }
}
