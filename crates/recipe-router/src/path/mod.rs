/// Path utilities for request paths
///
/// All functions are pure. Route matching only ever sees paths that went
/// through [`request_path`], so patterns never have to care about slashes,
/// query strings or fragments.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use recipe_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/recipe/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("login"));
/// assert!(!is_valid_path("/login/"));
/// assert!(!is_valid_path("/page//3"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/login/` → `/login`
/// - Double slashes: `/page//3` → `/page/3`
/// - Backslashes: `\recipe\42` → `/recipe/42`
/// - Missing leading slash: `bookmarks` → `/bookmarks`
///
/// # Examples
///
/// ```
/// use recipe_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/login"), Cow::Borrowed("/login")));
/// assert_eq!(normalize_path("/login/"), "/login");
/// assert_eq!(normalize_path("\\recipe\\42"), "/recipe/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Drops the query string and fragment from a location
///
/// ```
/// use recipe_router::path::strip_query_and_fragment;
///
/// assert_eq!(strip_query_and_fragment("/page/2?sort=new#top"), "/page/2");
/// assert_eq!(strip_query_and_fragment("/login#form"), "/login");
/// ```
pub fn strip_query_and_fragment(location: &str) -> &str {
    location
        .find(|c: char| c == '?' || c == '#')
        .map(|idx| &location[..idx])
        .unwrap_or(location)
}

/// Removes a history base prefix (e.g. `/app`) from a canonical path
///
/// Only strips on a segment boundary: base `/app` leaves `/apple` untouched.
pub fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }

    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Turns a raw location into the canonical path the matcher works on
///
/// Applies, in order: query/fragment removal, normalization, base stripping.
///
/// ```
/// use recipe_router::path::request_path;
///
/// assert_eq!(request_path("/app/recipe/42/?tab=steps", Some("/app")), "/recipe/42");
/// assert_eq!(request_path("/app", Some("/app")), "/");
/// assert_eq!(request_path("//bookmarks", None), "/bookmarks");
/// ```
pub fn request_path(location: &str, base: Option<&str>) -> String {
    let normalized = normalize_path(strip_query_and_fragment(location));
    match base {
        Some(base) => strip_base(&normalized, base).to_string(),
        None => normalized.into_owned(),
    }
}

/// Splits a canonical path into its non-empty segments
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
