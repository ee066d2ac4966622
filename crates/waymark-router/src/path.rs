//! URL path validation and normalization.
//!
//! Request paths arrive in whatever shape the client sent; patterns are
//! rendered in exactly one shape. Normalizing up front lets the exact map
//! stay a plain string lookup.

use std::borrow::Cow;

/// Validates that a path is already in the canonical form patterns are
/// rendered in.
///
/// # Rules
///
/// - must start with `/`
/// - must not contain `//` or `\`
/// - must not end with `/` (except the root `/` itself)
/// - must not be empty
///
/// # Examples
///
/// ```
/// use waymark_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/blog/42"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("blog"));
/// assert!(!is_canonical_path("/blog/"));
/// assert!(!is_canonical_path("/blog//42"));
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalizes a URL path to canonical form.
///
/// Returns `Cow::Borrowed` when the input is already canonical; allocates
/// only when something needs fixing. Handles trailing slashes, repeated
/// separators, and backslashes.
///
/// # Examples
///
/// ```
/// use waymark_router::path::normalize_path;
///
/// assert_eq!(normalize_path("/blog/42"), "/blog/42");
/// assert_eq!(normalize_path("/blog/42/"), "/blog/42");
/// assert_eq!(normalize_path("/blog//42"), "/blog/42");
/// assert_eq!(normalize_path("\\blog\\42"), "/blog/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .replace('\\', "/")
        .split('/')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_input_is_borrowed() {
        assert!(matches!(normalize_path("/blog/42"), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("/"), Cow::Borrowed(_)));
    }

    #[test]
    fn messy_input_is_repaired() {
        assert_eq!(normalize_path("/a///b//c/"), "/a/b/c");
        assert_eq!(normalize_path("a/b"), "/a/b");
    }

    #[test]
    fn slash_soup_collapses_to_root() {
        assert_eq!(normalize_path("///"), "/");
    }
}
