//! Integration tests for waymark-router.
//!
//! Covers table construction, the specificity order, and dispatch:
//! - static-only file sets and the exact map
//! - exact lookup winning over the parameterized scan
//! - dynamic, catch-all, and optional trailing parameters
//! - root fallback routes
//! - the empty-discovery and unsupported-pattern failures
//! - observer events

use std::path::Path;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use waymark_router::{
    BuildError, MatchKind, MatchTrace, RouteObserver, RouteTable, TableSummary,
};

const ROOT: &str = "/srv/pages";

fn table(files: &[&str]) -> RouteTable {
    RouteTable::build(files.iter().copied(), Path::new(ROOT)).unwrap()
}

#[test]
fn static_only_set_fills_exact_map_only() {
    let table = table(&["index.ts", "about.ts", "blog/index.ts", "blog/archive.ts"]);

    assert_eq!(table.len(), 4);
    assert_eq!(table.exact_routes().count(), 4);
    assert!(table.scan_routes().is_empty());

    let mut patterns: Vec<&str> = table.exact_routes().map(|r| r.pattern()).collect();
    patterns.sort();
    assert_eq!(patterns, vec!["/", "/about", "/blog", "/blog/archive"]);
}

#[test]
fn parameterized_patterns_never_enter_exact_map() {
    let table = table(&["about.ts", "blog/[id].ts", "docs/[...path].ts"]);

    assert_eq!(table.exact_routes().count(), 1);
    assert_eq!(table.scan_routes().len(), 2);
}

#[test]
fn blog_id_round_trip() {
    let table = table(&["blog/[id]/index.ts"]);

    let route = &table.scan_routes()[0];
    assert_eq!(route.pattern(), "/blog/[id]");
    assert_eq!(route.dynamic_count(), 1);

    let hit = table.dispatch("/blog/42").unwrap();
    assert_eq!(hit.params.get("id"), Some(&"42".to_string()));

    assert!(table.dispatch("/blog").is_none());
}

#[test]
fn catch_all_joins_and_requires_one_component() {
    let table = table(&["docs/[...path].ts"]);

    let hit = table.dispatch("/docs/a/b/c").unwrap();
    assert_eq!(hit.route.pattern(), "/docs/[...path]");
    assert_eq!(hit.params.get("path"), Some(&"a/b/c".to_string()));

    assert!(table.dispatch("/docs").is_none());
}

#[test]
fn exact_lookup_wins_over_dynamic_pattern() {
    let table = table(&["blog/[id].ts", "blog/archive.ts"]);

    let hit = table.dispatch("/blog/archive").unwrap();
    assert_eq!(hit.route.pattern(), "/blog/archive");
    assert!(hit.params.is_empty());

    let hit = table.dispatch("/blog/42").unwrap();
    assert_eq!(hit.route.pattern(), "/blog/[id]");
}

#[test]
fn root_fallback_catches_everything_else() {
    let table = table(&["[fallback].ts", "about.ts"]);

    let hit = table.dispatch("/about").unwrap();
    assert_eq!(hit.route.pattern(), "/about");

    let hit = table.dispatch("/anything-else").unwrap();
    assert_eq!(hit.route.pattern(), "/[fallback]");
    assert_eq!(hit.params.get("fallback"), Some(&"anything-else".to_string()));
}

#[test]
fn specific_patterns_scan_before_general_ones() {
    let table = table(&[
        "[fallback].ts",
        "docs/[...path].ts",
        "blog/[id].ts",
        "blog/[id]/notes/[note].ts",
    ]);

    // Static count ranks first; among equal static counts the pattern with
    // fewer non-catch-all dynamics precedes, which places the docs
    // catch-all ahead of the single-parameter blog route.
    let order: Vec<&str> = table.scan_routes().iter().map(|r| r.pattern()).collect();
    assert_eq!(
        order,
        vec![
            "/blog/[id]/notes/[note]",
            "/docs/[...path]",
            "/blog/[id]",
            "/[fallback]",
        ]
    );
}

#[test]
fn trailing_optional_parameter() {
    let table = table(&["archive/[[page]].ts"]);

    let hit = table.dispatch("/archive").unwrap();
    assert!(hit.params.is_empty());

    let hit = table.dispatch("/archive/2").unwrap();
    assert_eq!(hit.params.get("page"), Some(&"2".to_string()));

    assert!(table.dispatch("/archive/2/3").is_none());
}

#[test]
fn dispatch_normalizes_request_paths() {
    let table = table(&["blog/archive.ts", "blog/[id].ts"]);

    let hit = table.dispatch("/blog/archive/").unwrap();
    assert_eq!(hit.route.pattern(), "/blog/archive");

    let hit = table.dispatch("//blog//42").unwrap();
    assert_eq!(hit.params.get("id"), Some(&"42".to_string()));
}

#[test]
fn later_file_wins_a_duplicate_exact_pattern() {
    let table = table(&["blog.ts", "blog/index.ts"]);

    assert_eq!(table.len(), 1);
    let hit = table.dispatch("/blog").unwrap();
    assert_eq!(hit.route.file(), Path::new("blog/index.ts"));
}

#[test]
fn empty_file_set_is_rejected() {
    let err = RouteTable::build(std::iter::empty::<&str>(), Path::new(ROOT)).unwrap_err();
    assert!(matches!(err, BuildError::NoRoutesDiscovered { .. }));
}

#[test]
fn catch_all_with_optional_is_rejected() {
    let err =
        RouteTable::build(["docs/[[rev]]/[...path].ts"], Path::new(ROOT)).unwrap_err();
    match err {
        BuildError::UnsupportedPattern { pattern, .. } => {
            assert_eq!(pattern, "/docs/[[rev]]/[...path]");
        }
        other => panic!("expected UnsupportedPattern, got {other:?}"),
    }
}

#[test]
fn malformed_brackets_route_as_literals() {
    let table = table(&["blog/[].ts", "blog/[bad-name].ts"]);

    assert_eq!(table.exact_routes().count(), 2);
    assert!(table.dispatch("/blog/[]").is_some());
    assert!(table.dispatch("/blog/anything").is_none());
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RouteObserver for RecordingObserver {
    fn table_built(&self, summary: &TableSummary) {
        self.events
            .lock()
            .unwrap()
            .push(format!("built total={} exact={}", summary.total, summary.exact));
    }

    fn matched(&self, trace: &MatchTrace<'_>) {
        let kind = match trace.kind {
            MatchKind::Exact => "exact",
            MatchKind::Scan => "scan",
        };
        self.events
            .lock()
            .unwrap()
            .push(format!("{} {} -> {}", kind, trace.url_path, trace.pattern));
    }

    fn no_match(&self, url_path: &str) {
        self.events.lock().unwrap().push(format!("miss {}", url_path));
    }
}

#[test]
fn observer_sees_build_match_and_miss() {
    let observer = Arc::new(RecordingObserver::default());
    let table = RouteTable::builder()
        .with_observer(observer.clone())
        .build(["about.ts", "blog/[id].ts"], Path::new(ROOT))
        .unwrap();

    table.dispatch("/about");
    table.dispatch("/blog/42");
    table.dispatch("/nope");

    let events = observer.events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            "built total=2 exact=1".to_string(),
            "exact /about -> /about".to_string(),
            "scan /blog/42 -> /blog/[id]".to_string(),
            "miss /nope".to_string(),
        ]
    );
}
