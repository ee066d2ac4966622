//! File-path to route-pattern derivation.
//!
//! Transforms a relative file path into the segment sequence of its route.
//! Parsing is total: every syntactically valid relative path produces a
//! pattern, and malformed bracket names degrade to literal text.

use super::pattern::{classify_segment, Segment};

/// Strips the final `.`-delimited suffix from the last path component.
///
/// Only the last component is inspected, so `blog.v2/post.ts` keeps its
/// directory name intact. A leading dot (`.hidden`) is a name, not an
/// extension.
pub(crate) fn strip_extension(path: &str) -> &str {
    let component_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[component_start..].rfind('.') {
        Some(0) | None => path,
        Some(dot) => &path[..component_start + dot],
    }
}

/// Strips a trailing `index` component; an index file routes as its
/// containing directory.
pub(crate) fn strip_index(path: &str) -> &str {
    if path == "index" {
        ""
    } else {
        path.strip_suffix("/index").unwrap_or(path)
    }
}

/// Splits a stripped relative path into classified segments.
///
/// An empty path yields no segments, which is the root route `/`.
pub(crate) fn parse_segments(path: &str) -> Vec<Segment> {
    path.split('/')
        .filter(|component| !component.is_empty())
        .map(classify_segment)
        .collect()
}

/// Renders segments back into the canonical pattern string, e.g. `/blog/[id]`.
pub(crate) fn render_pattern(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }

    let mut pattern = String::new();
    for segment in segments {
        pattern.push('/');
        match segment {
            Segment::Static(text) => pattern.push_str(text),
            Segment::Dynamic(name) => {
                pattern.push('[');
                pattern.push_str(name);
                pattern.push(']');
            }
            Segment::CatchAll(name) => {
                pattern.push_str("[...");
                pattern.push_str(name);
                pattern.push(']');
            }
            Segment::OptionalDynamic(name) => {
                pattern.push_str("[[");
                pattern.push_str(name);
                pattern.push_str("]]");
            }
        }
    }
    pattern
}
