/// The route table
///
/// Entries are kept in declaration order and matched in that order; the
/// first entry that matches wins. A table is built once and never mutated
/// afterwards; the builder methods consume and return it.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::path::{normalize_path, request_path};
use crate::route::{RouteEntry, RouteMatch};
use crate::{RouteError, RouteParams, ViewId};

/// Redirect hops followed by [`RouteTable::resolve`] before giving up
pub const DEFAULT_MAX_REDIRECTS: usize = 8;

/// Outcome of a single matching step
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A redirect entry matched; navigation continues at `to`
    Redirect {
        from: String,
        to: String,
        matched: RouteMatch,
    },
    /// A view entry matched
    View { view: ViewId, matched: RouteMatch },
}

/// A fully resolved navigation: the view to render and what it receives
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Canonical path that produced the view
    pub path: String,
    pub view: ViewId,
    pub matched: RouteMatch,
    /// Paths visited before landing on `path`, oldest first
    pub redirected_from: Vec<String>,
}

impl Navigation {
    pub fn params(&self) -> &RouteParams {
        &self.matched.params
    }

    pub fn props(&self) -> RouteParams {
        self.matched.props()
    }

    pub fn render_key(&self) -> Option<String> {
        self.matched.render_key()
    }

    pub fn entry(&self) -> &RouteEntry {
        &self.matched.route
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirected_from.is_empty()
    }
}

/// Ordered, immutable set of route entries
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    named_routes: HashMap<String, usize>,
    case_insensitive: bool,
    base_path: Option<String>,
    max_redirects: usize,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Creates an empty, case-sensitive table
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            named_routes: HashMap::new(),
            case_insensitive: false,
            base_path: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Sets the history base (e.g. `/app`) stripped from every location
    ///
    /// The base is normalized like a path: `app/` becomes `/app`, and `/` or
    /// an empty string clears it.
    pub fn with_base_path(mut self, base: impl Into<String>) -> Self {
        let base = normalize_path(&base.into()).into_owned();
        self.base_path = (base != "/").then_some(base);
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Appends an entry; it is tried after every entry already declared
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route(RouteEntry::view("/", "SearchRecipes").unwrap())
    ///     .with_route(RouteEntry::view("/login", "Login").unwrap());
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn with_route(mut self, route: RouteEntry) -> Self {
        self.push_route(route);
        self
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = RouteEntry>,
    {
        for route in routes {
            self.push_route(route);
        }
        self
    }

    fn push_route(&mut self, route: RouteEntry) {
        // First declaration of a name keeps it, like first match wins
        if let Some(name) = &route.name {
            self.named_routes
                .entry(name.clone())
                .or_insert(self.routes.len());
        }
        self.routes.push(route);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Entries in declaration order
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn get_route_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.named_routes.get(name).map(|&idx| &self.routes[idx])
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Runs one matching step against `location`
    ///
    /// The location is canonicalized first (query, fragment, slashes, base).
    ///
    /// ```
    /// use recipe_router::{Resolution, RouteEntry, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route(RouteEntry::redirect("/", "/page/1").unwrap())
    ///     .with_route(RouteEntry::view("/page/:pageNumber", "SearchRecipes").unwrap());
    ///
    /// match table.lookup("/").unwrap() {
    ///     Resolution::Redirect { to, .. } => assert_eq!(to, "/page/1"),
    ///     Resolution::View { .. } => panic!("expected a redirect"),
    /// }
    /// assert!(table.lookup("/nonexistent").unwrap_err().is_not_found());
    /// ```
    pub fn lookup(&self, location: &str) -> Result<Resolution, RouteError> {
        self.lookup_path(request_path(location, self.base_path.as_deref()))
    }

    /// Matching step on an app path, one that no longer carries the base
    ///
    /// Redirect targets and history entries are app paths; running them
    /// through [`RouteTable::lookup`] would strip the base a second time.
    pub fn lookup_path(&self, path: impl AsRef<str>) -> Result<Resolution, RouteError> {
        let path = request_path(path.as_ref(), None);

        let matched = self
            .routes
            .iter()
            .enumerate()
            .find_map(|(index, route)| match route.matches(&path, self.case_insensitive) {
                Some(params) => Some(RouteMatch {
                    index,
                    route: route.clone(),
                    params,
                }),
                None => {
                    trace!(path = %path, pattern = %route.pattern, "route rejected");
                    None
                }
            });

        let Some(matched) = matched else {
            warn!(path = %path, "no route matched");
            return Err(RouteError::NotFound { path });
        };

        debug!(path = %path, pattern = %matched.route.pattern, index = matched.index, "route matched");

        if let Some(view) = matched.route.view_id().cloned() {
            return Ok(Resolution::View { view, matched });
        }

        match matched.redirect_target() {
            Some(to) => Ok(Resolution::Redirect {
                from: path,
                to,
                matched,
            }),
            None => Err(RouteError::InvalidEntry {
                pattern: matched.route.pattern,
            }),
        }
    }

    /// Resolves `location` to a view, following redirects
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route(RouteEntry::redirect("/", "/page/1").unwrap())
    ///     .with_route(RouteEntry::view("/page/:pageNumber", "SearchRecipes").unwrap().with_props());
    ///
    /// let nav = table.resolve("/").unwrap();
    /// assert_eq!(nav.path, "/page/1");
    /// assert_eq!(nav.view, "SearchRecipes");
    /// assert_eq!(nav.redirected_from, vec!["/".to_string()]);
    /// ```
    pub fn resolve(&self, location: &str) -> Result<Navigation, RouteError> {
        self.resolve_path(request_path(location, self.base_path.as_deref()))
    }

    /// Resolves an app path (base already removed), following redirects
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_base_path("/app")
    ///     .with_route(RouteEntry::view("/app/settings", "Settings").unwrap());
    ///
    /// assert_eq!(table.resolve("/app/app/settings").unwrap().view, "Settings");
    /// assert_eq!(table.resolve_path("/app/settings").unwrap().view, "Settings");
    /// ```
    pub fn resolve_path(&self, path: impl AsRef<str>) -> Result<Navigation, RouteError> {
        let start = request_path(path.as_ref(), None);
        let mut redirected_from: Vec<String> = Vec::new();
        let mut current = start.clone();

        loop {
            match self.lookup_path(&current)? {
                Resolution::View { view, matched } => {
                    return Ok(Navigation {
                        path: current,
                        view,
                        matched,
                        redirected_from,
                    });
                }
                Resolution::Redirect { from, to, .. } => {
                    let hops = redirected_from.len() + 1;
                    redirected_from.push(from);

                    let target = request_path(&to, None);
                    if hops > self.max_redirects || redirected_from.contains(&target) {
                        warn!(path = %start, hops, target = %target, "redirect loop");
                        return Err(RouteError::RedirectLoop { path: start, hops });
                    }

                    debug!(to = %target, hops, "following redirect");
                    current = target;
                }
            }
        }
    }

    /// Builds a location for the named route, including the base path
    ///
    /// ```
    /// use recipe_router::{RouteEntry, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_base_path("/app")
    ///     .with_route(RouteEntry::view("/recipe/:id", "RecipeDetail").unwrap().with_name("recipe"));
    ///
    /// assert_eq!(table.url_for_params("recipe", &[("id", "42")]), Some("/app/recipe/42".to_string()));
    /// assert_eq!(table.url_for_params("recipe", &[]), None);
    /// assert_eq!(table.url_for_params("missing", &[]), None);
    /// ```
    pub fn url_for(&self, name: &str, params: &RouteParams) -> Option<String> {
        let path = self.get_route_by_name(name)?.generate_url(params)?;
        Some(match &self.base_path {
            Some(base) if path == "/" => base.clone(),
            Some(base) => format!("{}{}", base, path),
            None => path,
        })
    }

    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let params: RouteParams = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.url_for(name, &params)
    }
}
