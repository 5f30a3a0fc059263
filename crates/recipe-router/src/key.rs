/// Render keys
///
/// A view instance is normally reused when consecutive navigations land on the
/// same route entry. A [`RouteKey`] derives a string from the captured params;
/// when that string changes the view must be re-instantiated instead.

use std::fmt;
use std::sync::Arc;

use crate::RouteParams;

type KeyFn = dyn Fn(&RouteParams) -> String + Send + Sync;

/// Key-derivation attached to a route entry
///
/// # Examples
///
/// ```
/// use recipe_router::{RouteKey, RouteParams};
///
/// let key = RouteKey::param("id");
/// let mut params = RouteParams::new();
/// params.insert("id".to_string(), "42".to_string());
/// assert_eq!(key.derive(&params), "42");
///
/// let custom = RouteKey::from_fn(|p| format!("recipe-{}", p.get("id").map(String::as_str).unwrap_or("")));
/// assert_eq!(custom.derive(&params), "recipe-42");
/// ```
#[derive(Clone)]
pub enum RouteKey {
    /// Key is the value of one captured parameter (empty when absent)
    Param(String),
    /// Arbitrary derivation over all captured params
    Custom(Arc<KeyFn>),
}

impl RouteKey {
    pub fn param(name: impl Into<String>) -> Self {
        RouteKey::Param(name.into())
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&RouteParams) -> String + Send + Sync + 'static,
    {
        RouteKey::Custom(Arc::new(f))
    }

    pub fn derive(&self, params: &RouteParams) -> String {
        match self {
            RouteKey::Param(name) => params.get(name).cloned().unwrap_or_default(),
            RouteKey::Custom(f) => f(params),
        }
    }

    /// Parameter name for `Param` keys; custom keys have none
    pub fn param_name(&self) -> Option<&str> {
        match self {
            RouteKey::Param(name) => Some(name),
            RouteKey::Custom(_) => None,
        }
    }
}

impl fmt::Debug for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKey::Param(name) => f.debug_tuple("Param").field(name).finish(),
            RouteKey::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_param_key_missing_is_empty() {
        let key = RouteKey::param("id");
        assert_eq!(key.derive(&params(&[])), "");
        assert_eq!(key.param_name(), Some("id"));
    }

    #[test]
    fn test_custom_key_sees_all_params() {
        let key = RouteKey::from_fn(|p| {
            let mut pairs: Vec<_> = p.iter().map(|(k, v)| format!("{k}={v}")).collect();
            pairs.sort();
            pairs.join("&")
        });
        assert_eq!(
            key.derive(&params(&[("b", "2"), ("a", "1")])),
            "a=1&b=2"
        );
        assert_eq!(key.param_name(), None);
        assert_eq!(format!("{:?}", key), "Custom(..)");
    }
}
