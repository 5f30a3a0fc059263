/// Pattern segment classification
///
/// Pure parsing of a single `/`-separated piece of a route pattern.

/// Parameter name given to a bare `*` wildcard
pub const DEFAULT_WILDCARD_NAME: &str = "pathMatch";

/// One segment of a route pattern
///
/// # Examples
///
/// ```
/// use recipe_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("login"), Ok(Segment::Static("login".into())));
/// assert_eq!(classify_segment(":id"), Ok(Segment::Param("id".into())));
/// assert_eq!(classify_segment("*rest"), Ok(Segment::Wildcard("rest".into())));
/// assert_eq!(
///     classify_segment(":pathMatch(.*)*"),
///     Ok(Segment::Wildcard("pathMatch".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, compared as-is
    Static(String),
    /// `:name`, captures exactly one path component
    Param(String),
    /// `*name`, captures the rest of the path (zero or more components)
    Wildcard(String),
}

impl Segment {
    /// Name of the captured parameter, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Param(name) | Segment::Wildcard(name) => Some(name),
        }
    }

    /// Canonical pattern text for this segment
    pub fn to_pattern(&self) -> String {
        match self {
            Segment::Static(text) => text.clone(),
            Segment::Param(name) => format!(":{}", name),
            Segment::Wildcard(name) => format!("*{}", name),
        }
    }
}

/// Reason a segment was rejected; the caller attaches the full pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentError(pub String);

/// Classifies a segment into a [`Segment`]
///
/// # Parsing Rules (evaluated in order)
///
/// 1. `:name(.*)*` or `:name(.*)` → wildcard (router-library spelling)
/// 2. `:name` → named parameter
/// 3. `*` or `*name` → wildcard
/// 4. anything else → static
pub fn classify_segment(segment: &str) -> Result<Segment, SegmentError> {
    if let Some(inner) = segment.strip_prefix(':') {
        if let Some(name) = inner
            .strip_suffix("(.*)*")
            .or_else(|| inner.strip_suffix("(.*)"))
        {
            return validate_name(name).map(|name| Segment::Wildcard(name.to_string()));
        }
        return validate_name(inner).map(|name| Segment::Param(name.to_string()));
    }

    if let Some(name) = segment.strip_prefix('*') {
        if name.is_empty() {
            return Ok(Segment::Wildcard(DEFAULT_WILDCARD_NAME.to_string()));
        }
        return validate_name(name).map(|name| Segment::Wildcard(name.to_string()));
    }

    Ok(Segment::Static(segment.to_string()))
}

fn validate_name(name: &str) -> Result<&str, SegmentError> {
    if name.is_empty() {
        return Err(SegmentError("empty parameter name".to_string()));
    }

    match name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        Some(bad) => Err(SegmentError(format!(
            "invalid character `{}` in parameter `{}`",
            bad, name
        ))),
        None => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("bookmarks"),
            Ok(Segment::Static("bookmarks".to_string()))
        );
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(
            classify_segment(":pageNumber"),
            Ok(Segment::Param("pageNumber".to_string()))
        );
        assert_eq!(
            classify_segment(":folder_id"),
            Ok(Segment::Param("folder_id".to_string()))
        );
    }

    #[test]
    fn test_classify_wildcards() {
        assert_eq!(
            classify_segment("*"),
            Ok(Segment::Wildcard(DEFAULT_WILDCARD_NAME.to_string()))
        );
        assert_eq!(
            classify_segment("*slug"),
            Ok(Segment::Wildcard("slug".to_string()))
        );
        assert_eq!(
            classify_segment(":all(.*)"),
            Ok(Segment::Wildcard("all".to_string()))
        );
    }

    #[test]
    fn test_classify_rejects_bad_names() {
        assert!(classify_segment(":").is_err());
        assert!(classify_segment(":id?").is_err());
        assert!(classify_segment("*a-b").is_err());
    }

    #[test]
    fn test_segment_round_trip_text() {
        assert_eq!(Segment::Param("id".into()).to_pattern(), ":id");
        assert_eq!(Segment::Wildcard("rest".into()).to_pattern(), "*rest");
        assert_eq!(Segment::Static("login".into()).param_name(), None);
    }
}
