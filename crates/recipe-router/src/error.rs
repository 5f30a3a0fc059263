/// Errors raised while declaring or resolving routes
///
/// Declaration-time variants (`InvalidPattern`, `DuplicateParam`, `InvalidEntry`,
/// `UnknownKeyParam`) surface when a table is built. `NotFound` and
/// `RedirectLoop` come from resolving a path against a finished table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches path `{path}`")]
    NotFound { path: String },

    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("route `{pattern}` must declare exactly one of a view or a redirect")]
    InvalidEntry { pattern: String },

    #[error("route `{pattern}` is keyed on `{name}`, which it does not capture")]
    UnknownKeyParam { pattern: String, name: String },

    #[error("redirect loop while resolving `{path}` after {hops} hop(s)")]
    RedirectLoop { path: String, hops: usize },
}

impl RouteError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the runtime "nothing matched" case
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}
