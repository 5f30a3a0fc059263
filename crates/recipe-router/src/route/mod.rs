/// Route entries
///
/// A [`RouteEntry`] is one declared line of the route table: a parsed
/// pattern plus what to do when it matches (render a view or redirect).

use std::collections::HashMap;

use crate::path;
use crate::{RouteError, RouteKey, RouteParams, ViewId};

pub mod parser;
pub mod pattern;

pub use parser::{parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, Segment};

/// What a matched entry resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    /// Target path; may reference the source pattern's params as `:name`
    Redirect(String),
}

/// A single declared route
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Canonical pattern like "/recipe/:id"
    pub pattern: String,
    pub segments: Vec<Segment>,
    /// Parameter names in declaration order
    pub params: Vec<String>,
    pub target: RouteTarget,
    /// Whether captured params are handed to the view as props
    pub props: bool,
    /// Key-derivation forcing re-instantiation when the key changes
    pub key: Option<RouteKey>,
    /// Optional name for URL generation
    pub name: Option<String>,
    /// Arbitrary metadata (titles and the like)
    pub metadata: HashMap<String, String>,
}

impl RouteEntry {
    /// Declares a route rendering `view`
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_router::RouteEntry;
    ///
    /// let entry = RouteEntry::view("/recipe/:id", "RecipeDetail").unwrap().with_props();
    /// assert_eq!(entry.params, vec!["id"]);
    /// assert!(entry.props);
    /// ```
    pub fn view(pattern: &str, view: impl Into<ViewId>) -> Result<Self, RouteError> {
        Self::build(pattern, RouteTarget::View(view.into()))
    }

    /// Declares a redirect from `pattern` to `to`
    ///
    /// The target may reuse the source params: `/r/:id` → `/recipe/:id`.
    /// Referencing a param the source does not capture is rejected.
    ///
    /// ```
    /// use recipe_router::RouteEntry;
    ///
    /// assert!(RouteEntry::redirect("/", "/page/1").is_ok());
    /// assert!(RouteEntry::redirect("/r/:id", "/recipe/:id").is_ok());
    /// assert!(RouteEntry::redirect("/r/:id", "/recipe/:slug").is_err());
    /// ```
    pub fn redirect(pattern: &str, to: impl Into<String>) -> Result<Self, RouteError> {
        let to = to.into();
        let parsed_target = parse_pattern(&to)?;
        let entry = Self::build(pattern, RouteTarget::Redirect(parsed_target.pattern))?;

        if let Some(unknown) = parsed_target
            .params
            .iter()
            .find(|name| !entry.params.contains(name))
        {
            return Err(RouteError::invalid_pattern(
                &to,
                format!("redirect target references unknown parameter `{}`", unknown),
            ));
        }

        Ok(entry)
    }

    fn build(pattern: &str, target: RouteTarget) -> Result<Self, RouteError> {
        let parsed = parse_pattern(pattern)?;
        Ok(RouteEntry {
            pattern: parsed.pattern,
            segments: parsed.segments,
            params: parsed.params,
            target,
            props: false,
            key: None,
            name: None,
            metadata: HashMap::new(),
        })
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Forwards all captured params to the view as props
    pub fn with_props(self) -> Self {
        self.with_props_enabled(true)
    }

    pub fn with_props_enabled(mut self, props: bool) -> Self {
        self.props = props;
        self
    }

    /// Attaches a key-derivation function
    ///
    /// A parameter key must name a parameter the pattern captures.
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteKey};
    ///
    /// let entry = RouteEntry::view("/recipe/:id", "RecipeDetail")
    ///     .unwrap()
    ///     .with_props()
    ///     .with_key(RouteKey::param("id"))
    ///     .unwrap();
    /// assert!(entry.key.is_some());
    ///
    /// let unknown = RouteEntry::view("/recipe/:id", "RecipeDetail")
    ///     .unwrap()
    ///     .with_key(RouteKey::param("recipeId"));
    /// assert!(unknown.is_err());
    /// ```
    pub fn with_key(mut self, key: RouteKey) -> Result<Self, RouteError> {
        if let Some(name) = key.param_name() {
            if !self.params.iter().any(|p| p == name) {
                return Err(RouteError::UnknownKeyParam {
                    pattern: self.pattern,
                    name: name.to_string(),
                });
            }
        }

        self.key = Some(key);
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&String> {
        self.metadata.get(key)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn view_id(&self) -> Option<&ViewId> {
        match &self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::View(_) => None,
            RouteTarget::Redirect(to) => Some(to),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Matches a canonical path against this entry
    ///
    /// Static segments compare literally (ASCII case folded when
    /// `case_insensitive`), `:name` takes one component, a wildcard takes the
    /// rest. Captured values are percent-decoded.
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<RouteParams> {
        let path_segments = path::segments(path);
        let mut params = RouteParams::new();
        let mut idx = 0;

        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    let part = *path_segments.get(idx)?;
                    let same = if case_insensitive {
                        text.eq_ignore_ascii_case(part)
                    } else {
                        text == part
                    };
                    if !same {
                        return None;
                    }
                    idx += 1;
                }
                Segment::Param(name) => {
                    let part = *path_segments.get(idx)?;
                    params.insert(name.clone(), decode(part));
                    idx += 1;
                }
                Segment::Wildcard(name) => {
                    let rest = path_segments[idx..]
                        .iter()
                        .map(|part| decode(part))
                        .collect::<Vec<_>>()
                        .join("/");
                    params.insert(name.clone(), rest);
                    idx = path_segments.len();
                }
            }
        }

        (idx == path_segments.len()).then_some(params)
    }

    /// Props handed to the view: all params when forwarding, none otherwise
    pub fn props_for(&self, params: &RouteParams) -> RouteParams {
        if self.props {
            params.clone()
        } else {
            RouteParams::new()
        }
    }

    /// Redirect target with `:name` placeholders filled from `params`
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteParams};
    ///
    /// let entry = RouteEntry::redirect("/r/:id", "/recipe/:id").unwrap();
    /// let mut params = RouteParams::new();
    /// params.insert("id".to_string(), "42".to_string());
    /// assert_eq!(entry.redirect_target(&params), Some("/recipe/42".to_string()));
    /// ```
    pub fn redirect_target(&self, params: &RouteParams) -> Option<String> {
        let to = self.redirect_to()?;
        let target = parse_pattern(to).ok()?;
        fill_segments(&target.segments, params)
    }

    /// Builds a concrete path for this entry from `params`
    ///
    /// Returns `None` when a `:name` param is missing or empty. A missing
    /// wildcard value is treated as empty.
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteParams};
    ///
    /// let entry = RouteEntry::view("/page/:pageNumber", "SearchRecipes").unwrap();
    /// let mut params = RouteParams::new();
    /// params.insert("pageNumber".to_string(), "3".to_string());
    /// assert_eq!(entry.generate_url(&params), Some("/page/3".to_string()));
    /// assert_eq!(entry.generate_url(&RouteParams::new()), None);
    /// ```
    pub fn generate_url(&self, params: &RouteParams) -> Option<String> {
        fill_segments(&self.segments, params)
    }
}

fn decode(part: &str) -> String {
    urlencoding::decode(part)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| part.to_string())
}

fn fill_segments(segments: &[Segment], params: &RouteParams) -> Option<String> {
    let parts: Option<Vec<String>> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Static(text) => Some(text.clone()),
            Segment::Param(name) => params
                .get(name)
                .filter(|value| !value.is_empty())
                .map(|value| urlencoding::encode(value).into_owned()),
            Segment::Wildcard(name) => Some(
                params
                    .get(name)
                    .map(|value| {
                        value
                            .split('/')
                            .map(|piece| urlencoding::encode(piece).into_owned())
                            .collect::<Vec<_>>()
                            .join("/")
                    })
                    .unwrap_or_default(),
            ),
        })
        .collect();

    parts.map(|parts| {
        let filtered: Vec<String> = parts.into_iter().filter(|p| !p.is_empty()).collect();
        if filtered.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", filtered.join("/"))
        }
    })
}

/// Result of matching one entry against a path
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Declaration index of the matched entry in its table
    pub index: usize,
    pub route: RouteEntry,
    pub params: RouteParams,
}

impl RouteMatch {
    pub fn is_redirect(&self) -> bool {
        self.route.is_redirect()
    }

    pub fn redirect_target(&self) -> Option<String> {
        self.route.redirect_target(&self.params)
    }

    pub fn props(&self) -> RouteParams {
        self.route.props_for(&self.params)
    }

    /// Render key derived from the params, when the entry declares one
    pub fn render_key(&self) -> Option<String> {
        self.route.key.as_ref().map(|key| key.derive(&self.params))
    }
}
