//! Segment classification for route patterns.
//!
//! Pure parsing of one `/`-delimited path component into a typed segment.
//! Same input always produces the same output; no side effects.

/// One component of a route pattern.
///
/// # Examples
///
/// ```
/// use waymark_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("about"), Segment::Static("about".into()));
/// assert_eq!(classify_segment("[id]"), Segment::Dynamic("id".into()));
/// assert_eq!(classify_segment("[...path]"), Segment::CatchAll("path".into()));
/// assert_eq!(classify_segment("[[page]]"), Segment::OptionalDynamic("page".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, matched exactly.
    Static(String),
    /// `[name]` - binds exactly one URL component.
    Dynamic(String),
    /// `[...name]` - binds all remaining URL components.
    CatchAll(String),
    /// `[[name]]` - binds one URL component when present.
    OptionalDynamic(String),
}

impl Segment {
    /// Parameter name bound by this segment, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Dynamic(name) | Segment::CatchAll(name) | Segment::OptionalDynamic(name) => {
                Some(name)
            }
        }
    }

    /// Whether this segment is literal text.
    pub fn is_static(&self) -> bool {
        matches!(self, Segment::Static(_))
    }

    /// Length of the literal text; zero for parameter segments.
    pub fn raw_len(&self) -> usize {
        match self {
            Segment::Static(text) => text.len(),
            _ => 0,
        }
    }
}

/// Names a bracket may bind: `[A-Za-z0-9_]+`.
fn is_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Classifies one path component into a [`Segment`].
///
/// Checked in order: `[[name]]`, `[...name]`, `[name]`, static. A bracket
/// with an empty or non-word name (`[]`, `[foo-bar]`) is kept as literal
/// text rather than rejected, so a typo in a file name cannot take route
/// discovery down.
pub fn classify_segment(component: &str) -> Segment {
    if let Some(inner) = component.strip_prefix("[[").and_then(|s| s.strip_suffix("]]")) {
        if is_param_name(inner) {
            return Segment::OptionalDynamic(inner.to_string());
        }
    }

    if let Some(inner) = component.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Some(name) = inner.strip_prefix("...") {
            if is_param_name(name) {
                return Segment::CatchAll(name.to_string());
            }
        } else if is_param_name(inner) {
            return Segment::Dynamic(inner.to_string());
        }
    }

    Segment::Static(component.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_static() {
        assert_eq!(classify_segment("about"), Segment::Static("about".to_string()));
    }

    #[test]
    fn classify_dynamic() {
        assert_eq!(classify_segment("[id]"), Segment::Dynamic("id".to_string()));
    }

    #[test]
    fn classify_catch_all() {
        assert_eq!(classify_segment("[...slug]"), Segment::CatchAll("slug".to_string()));
    }

    #[test]
    fn classify_optional_dynamic() {
        assert_eq!(
            classify_segment("[[page]]"),
            Segment::OptionalDynamic("page".to_string())
        );
    }

    #[test]
    fn classify_underscore_and_digits() {
        assert_eq!(
            classify_segment("[post_id2]"),
            Segment::Dynamic("post_id2".to_string())
        );
    }

    #[test]
    fn empty_bracket_is_literal() {
        assert_eq!(classify_segment("[]"), Segment::Static("[]".to_string()));
    }

    #[test]
    fn non_word_name_is_literal() {
        assert_eq!(
            classify_segment("[foo-bar]"),
            Segment::Static("[foo-bar]".to_string())
        );
    }

    #[test]
    fn bare_ellipsis_is_literal() {
        assert_eq!(classify_segment("[...]"), Segment::Static("[...]".to_string()));
    }

    #[test]
    fn double_bracket_catch_all_is_literal() {
        // No optional catch-all form; falls through to literal text.
        assert_eq!(
            classify_segment("[[...slug]]"),
            Segment::Static("[[...slug]]".to_string())
        );
    }

    #[test]
    fn param_accessor() {
        assert_eq!(classify_segment("[id]").param(), Some("id"));
        assert_eq!(classify_segment("about").param(), None);
    }

    #[test]
    fn raw_len_counts_literal_text_only() {
        assert_eq!(classify_segment("blog").raw_len(), 4);
        assert_eq!(classify_segment("[id]").raw_len(), 0);
    }
}
