//! Route patterns derived from file paths.
//!
//! [`RoutePattern`] is the central value of the engine: one file path in,
//! one URL-matching template out, with the counters the specificity order
//! is computed from cached at parse time.

pub(crate) mod parser;
pub mod pattern;
pub mod specificity;

pub use pattern::{classify_segment, Segment};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Parameters bound by a successful match, keyed by segment name.
///
/// Produced fresh per request and owned by the dispatch call that made it.
pub type Params = HashMap<String, String>;

/// A URL-matching template derived from one file's path.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    pub(crate) segments: Vec<Segment>,
    pub(crate) pattern: String,
    pub(crate) file: PathBuf,
    pub(crate) abs_path: PathBuf,
    pub(crate) static_count: usize,
    pub(crate) dynamic_count: usize,
    pub(crate) has_catch_all: bool,
    pub(crate) raw_len: usize,
    /// Position in discovery order; final specificity tie-break.
    pub(crate) index: usize,
}

impl RoutePattern {
    /// Derives a route pattern from a file path relative to the routing root.
    ///
    /// The extension and a trailing `index` component are stripped before
    /// the remaining components are classified. Never fails: malformed
    /// bracket names become literal segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use waymark_router::RoutePattern;
    ///
    /// let route = RoutePattern::from_file("blog/[id]/index.ts", Path::new("/srv/pages"));
    /// assert_eq!(route.pattern(), "/blog/[id]");
    ///
    /// let root = RoutePattern::from_file("index.ts", Path::new("/srv/pages"));
    /// assert_eq!(root.pattern(), "/");
    /// assert!(root.is_root());
    /// ```
    pub fn from_file(relative: &str, root_dir: &Path) -> Self {
        let stripped = parser::strip_index(parser::strip_extension(relative));
        let segments = parser::parse_segments(stripped);
        let pattern = parser::render_pattern(&segments);

        let static_count = segments.iter().filter(|s| s.is_static()).count();
        let dynamic_count = segments
            .iter()
            .filter(|s| matches!(s, Segment::Dynamic(_) | Segment::OptionalDynamic(_)))
            .count();
        let has_catch_all = segments.iter().any(|s| matches!(s, Segment::CatchAll(_)));
        let raw_len = segments.iter().map(Segment::raw_len).sum();

        Self {
            segments,
            pattern,
            file: PathBuf::from(relative),
            abs_path: root_dir.join(relative),
            static_count,
            dynamic_count,
            has_catch_all,
            raw_len,
            index: 0,
        }
    }

    /// The rendered pattern, e.g. `/blog/[id]`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The source file path relative to the routing root.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The resolved absolute path of the source file.
    pub fn abs_path(&self) -> &Path {
        &self.abs_path
    }

    /// The parsed segment sequence, in match order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Count of literal segments.
    pub fn static_count(&self) -> usize {
        self.static_count
    }

    /// Count of dynamic and optional segments, catch-alls excluded.
    pub fn dynamic_count(&self) -> usize {
        self.dynamic_count
    }

    /// Whether the pattern contains a catch-all segment.
    pub fn has_catch_all(&self) -> bool {
        self.has_catch_all
    }

    /// Total number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether any segment binds a parameter.
    pub fn has_params(&self) -> bool {
        self.dynamic_count > 0 || self.has_catch_all
    }

    /// Whether this is the root route `/` (zero segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Component-wise match of a canonical URL path against this pattern.
    ///
    /// Walks segments left to right, one URL component per segment. Static
    /// segments compare case-sensitively. A dynamic segment binds exactly
    /// one component. A catch-all binds one or more remaining components
    /// joined with `/`; it consumes everything to the end of the path, so
    /// segments placed after one can never be satisfied. An optional
    /// segment may be absent only in final position; elsewhere it binds
    /// like a dynamic segment.
    ///
    /// Both the pattern and the path must be fully consumed for a match.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use waymark_router::RoutePattern;
    ///
    /// let route = RoutePattern::from_file("blog/[id].ts", Path::new("/srv/pages"));
    ///
    /// let params = route.matches("/blog/42").unwrap();
    /// assert_eq!(params.get("id"), Some(&"42".to_string()));
    ///
    /// assert!(route.matches("/blog").is_none());
    /// assert!(route.matches("/blog/42/extra").is_none());
    /// ```
    pub fn matches(&self, url_path: &str) -> Option<Params> {
        let components: Vec<&str> = url_path.split('/').filter(|c| !c.is_empty()).collect();
        let mut params = Params::new();
        let mut pos = 0;

        for (i, segment) in self.segments.iter().enumerate() {
            let is_last = i + 1 == self.segments.len();
            match segment {
                Segment::Static(text) => match components.get(pos) {
                    Some(component) if *component == text.as_str() => pos += 1,
                    _ => return None,
                },
                Segment::Dynamic(name) => {
                    let value = components.get(pos)?;
                    params.insert(name.clone(), (*value).to_string());
                    pos += 1;
                }
                Segment::OptionalDynamic(name) => {
                    if let Some(value) = components.get(pos) {
                        params.insert(name.clone(), (*value).to_string());
                        pos += 1;
                    } else if !is_last {
                        return None;
                    }
                }
                Segment::CatchAll(name) => {
                    if pos >= components.len() {
                        return None;
                    }
                    params.insert(name.clone(), components[pos..].join("/"));
                    pos = components.len();
                }
            }
        }

        (pos == components.len()).then_some(params)
    }
}
