//! The route table: built once, read forever.
//!
//! Two views over one pattern set. Patterns with no parameters live in an
//! exact map keyed by their rendered path; everything else sits in a list
//! sorted by specificity and scanned linearly. No pattern is in both.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::BuildError;
use crate::observer::{MatchKind, MatchTrace, NoopObserver, RouteObserver, TableSummary};
use crate::path::normalize_path;
use crate::route::{specificity, Params, RoutePattern, Segment};

/// A successful dispatch: the winning pattern and its bound parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The pattern that won.
    pub route: &'a RoutePattern,
    /// Parameters bound by the match; empty for exact hits.
    pub params: Params,
}

/// Assembles a [`RouteTable`] from discovered file paths.
pub struct RouteTableBuilder {
    observer: Arc<dyn RouteObserver>,
}

impl RouteTableBuilder {
    /// Builder with the default no-op observer.
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoopObserver),
        }
    }

    /// Attaches an event sink. It is consulted for the build summary and
    /// for every dispatch on the finished table.
    pub fn with_observer(mut self, observer: Arc<dyn RouteObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Parses every file path, partitions the patterns into the exact map
    /// and the specificity-ordered scan list, and reports the result to
    /// the observer.
    ///
    /// Fails on an empty file set and on a pattern mixing a catch-all with
    /// an optional segment. Performs no I/O; walking the filesystem is the
    /// caller's job.
    pub fn build<I, S>(self, files: I, root_dir: &Path) -> Result<RouteTable, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = HashMap::new();
        let mut ordered = Vec::new();
        let mut discovered = 0usize;

        for (index, file) in files.into_iter().enumerate() {
            let mut route = RoutePattern::from_file(file.as_ref(), root_dir);
            route.index = index;

            let has_optional = route
                .segments
                .iter()
                .any(|s| matches!(s, Segment::OptionalDynamic(_)));
            if route.has_catch_all && has_optional {
                return Err(BuildError::UnsupportedPattern {
                    pattern: route.pattern,
                    file: route.file,
                });
            }

            discovered += 1;
            if route.has_params() {
                ordered.push(route);
            } else {
                // Later discoveries win, as when `blog/index.ts` shadows a
                // sibling `blog.ts`.
                exact.insert(route.pattern.clone(), route);
            }
        }

        if discovered == 0 {
            return Err(BuildError::NoRoutesDiscovered {
                root: root_dir.to_path_buf(),
            });
        }

        ordered.sort_by(specificity::compare);

        let table = RouteTable {
            exact,
            ordered,
            observer: self.observer,
        };
        table.observer.table_built(&table.summary());
        Ok(table)
    }
}

impl Default for RouteTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The two read-only views over a discovered pattern set.
///
/// Built once before serving starts; [`RouteTable::dispatch`] is a pure
/// read, so the table can be shared across any number of concurrent
/// request tasks without locking. Rebuilding means discarding the table
/// and constructing a new one.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use waymark_router::RouteTable;
///
/// let table = RouteTable::build(
///     ["index.ts", "blog/archive.ts", "blog/[id].ts"],
///     Path::new("/srv/pages"),
/// )
/// .unwrap();
///
/// // The literal route wins over the parameterized one.
/// let hit = table.dispatch("/blog/archive").unwrap();
/// assert_eq!(hit.route.pattern(), "/blog/archive");
///
/// let hit = table.dispatch("/blog/42").unwrap();
/// assert_eq!(hit.params.get("id"), Some(&"42".to_string()));
///
/// assert!(table.dispatch("/missing").is_none());
/// ```
pub struct RouteTable {
    exact: HashMap<String, RoutePattern>,
    ordered: Vec<RoutePattern>,
    observer: Arc<dyn RouteObserver>,
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("exact", &self.exact)
            .field("ordered", &self.ordered)
            .finish_non_exhaustive()
    }
}

impl RouteTable {
    /// Starts a builder.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Builds a table with the default no-op observer.
    pub fn build<I, S>(files: I, root_dir: &Path) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RouteTableBuilder::new().build(files, root_dir)
    }

    /// Resolves a request path to the most specific matching route.
    ///
    /// The path is normalized first, then looked up in the exact map; on a
    /// miss the parameterized patterns are scanned in specificity order.
    /// `None` is the not-found signal - the caller owns the response for
    /// it, the table never produces one.
    pub fn dispatch(&self, url_path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(url_path);

        if let Some(route) = self.exact.get(path.as_ref()) {
            let params = Params::new();
            self.observer.matched(&MatchTrace {
                url_path: path.as_ref(),
                pattern: route.pattern(),
                file: route.file(),
                params: &params,
                kind: MatchKind::Exact,
            });
            return Some(RouteMatch { route, params });
        }

        for route in &self.ordered {
            if let Some(params) = route.matches(path.as_ref()) {
                self.observer.matched(&MatchTrace {
                    url_path: path.as_ref(),
                    pattern: route.pattern(),
                    file: route.file(),
                    params: &params,
                    kind: MatchKind::Scan,
                });
                return Some(RouteMatch { route, params });
            }
        }

        self.observer.no_match(path.as_ref());
        None
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.exact.len() + self.ordered.len()
    }

    /// Whether the table holds no routes.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.ordered.is_empty()
    }

    /// Exact-map entries, in no particular order.
    pub fn exact_routes(&self) -> impl Iterator<Item = &RoutePattern> {
        self.exact.values()
    }

    /// Parameterized patterns in scan order, most specific first.
    pub fn scan_routes(&self) -> &[RoutePattern] {
        &self.ordered
    }

    fn summary(&self) -> TableSummary {
        TableSummary {
            total: self.len(),
            exact: self.exact.len(),
            scan_order: self
                .ordered
                .iter()
                .map(|route| route.pattern().to_string())
                .collect(),
        }
    }
}
