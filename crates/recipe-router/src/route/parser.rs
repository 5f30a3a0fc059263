/// Whole-pattern parsing
///
/// Folds classified segments into a [`ParsedPattern`], enforcing the
/// cross-segment rules (wildcard last, unique parameter names).

use super::pattern::{classify_segment, Segment};
use crate::path::normalize_path;
use crate::RouteError;

/// A route pattern split into typed segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Canonical pattern text, e.g. `/recipe/:id`
    pub pattern: String,
    pub segments: Vec<Segment>,
    /// Parameter names in declaration order
    pub params: Vec<String>,
}

#[derive(Default)]
struct ParseState {
    segments: Vec<Segment>,
    params: Vec<String>,
}

impl ParseState {
    fn push(mut self, raw: &str, pattern: &str) -> Result<Self, RouteError> {
        if matches!(self.segments.last(), Some(Segment::Wildcard(_))) {
            return Err(RouteError::invalid_pattern(
                pattern,
                "wildcard must be the last segment",
            ));
        }

        let segment = classify_segment(raw)
            .map_err(|err| RouteError::invalid_pattern(pattern, err.0))?;

        if let Some(name) = segment.param_name() {
            if self.params.iter().any(|p| p == name) {
                return Err(RouteError::DuplicateParam {
                    pattern: pattern.to_string(),
                    name: name.to_string(),
                });
            }
            self.params.push(name.to_string());
        }

        self.segments.push(segment);
        Ok(self)
    }

    fn finish(self) -> ParsedPattern {
        let pattern = if self.segments.is_empty() {
            "/".to_string()
        } else {
            self.segments
                .iter()
                .map(|s| format!("/{}", s.to_pattern()))
                .collect()
        };

        ParsedPattern {
            pattern,
            segments: self.segments,
            params: self.params,
        }
    }
}

/// Parses a route pattern such as `/suggestions/:folderId`
///
/// Slashes are normalized first, so `recipe/:id/` and `/recipe/:id` parse to
/// the same thing.
///
/// # Examples
///
/// ```
/// use recipe_router::route::parse_pattern;
///
/// let parsed = parse_pattern("/page/:pageNumber/").unwrap();
/// assert_eq!(parsed.pattern, "/page/:pageNumber");
/// assert_eq!(parsed.params, vec!["pageNumber"]);
///
/// assert!(parse_pattern("/recipe/:id/:id").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<ParsedPattern, RouteError> {
    let normalized = normalize_path(pattern);

    normalized
        .split('/')
        .filter(|s| !s.is_empty())
        .try_fold(ParseState::default(), |state, raw| state.push(raw, pattern))
        .map(ParseState::finish)
}
