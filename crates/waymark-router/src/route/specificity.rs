//! Specificity ordering between route patterns.
//!
//! An incoming URL must always prefer the most literally-specific pattern
//! that matches it, so `/blog/archive` beats `/blog/[id]` for the URL
//! `/blog/archive`. The ordered scan list is sorted with [`compare`] once
//! at table-build time.

use std::cmp::Ordering;

use super::RoutePattern;

/// Orders two patterns by match precedence, most specific first.
///
/// Rules, applied until one discriminates:
///
/// 1. the root route sorts after every other pattern
/// 2. more static segments first
/// 3. fewer dynamic (non-catch-all) segments first
/// 4. patterns without a catch-all before patterns with one
/// 5. longer total literal text first (`/blog/[id]` before `/[a]/raw`)
/// 6. earlier discovery first
///
/// Rule 6 makes this a strict total order, so the sorted result is
/// deterministic across runs given the same file set.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use std::path::Path;
/// use waymark_router::route::specificity::compare;
/// use waymark_router::RoutePattern;
///
/// let root = Path::new("/srv/pages");
/// let by_id = RoutePattern::from_file("blog/[id].ts", root);
/// let fallback = RoutePattern::from_file("[fallback].ts", root);
///
/// assert_eq!(compare(&by_id, &fallback), Ordering::Less);
/// ```
pub fn compare(a: &RoutePattern, b: &RoutePattern) -> Ordering {
    a.is_root()
        .cmp(&b.is_root())
        .then(b.static_count.cmp(&a.static_count))
        .then(a.dynamic_count.cmp(&b.dynamic_count))
        .then(a.has_catch_all.cmp(&b.has_catch_all))
        .then(b.raw_len.cmp(&a.raw_len))
        .then(a.index.cmp(&b.index))
}
