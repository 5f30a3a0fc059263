//! Integration tests for recipe-router
//!
//! Tests are organized by feature area and cover:
//! - Pattern declaration and rejection
//! - Matching order and path normalization
//! - Wildcards and percent-decoding
//! - Redirects
//! - Named routes
//! - Configuration files

use recipe_router::*;
use std::borrow::Cow;

// ============================================================================
// Declaration
// ============================================================================

#[test]
fn test_entry_from_pattern_static() {
    let entry = RouteEntry::view("/login", "Login").unwrap();
    assert_eq!(entry.pattern, "/login");
    assert!(entry.params.is_empty());
    assert_eq!(entry.segments, vec![Segment::Static("login".to_string())]);
}

#[test]
fn test_entry_from_pattern_dynamic() {
    let entry = RouteEntry::view("recipe/:id/", "RecipeDetail").unwrap();
    assert_eq!(entry.pattern, "/recipe/:id");
    assert_eq!(entry.params, vec!["id"]);
    assert!(!entry.props);
    assert!(entry.key.is_none());
}

#[test]
fn test_entry_root() {
    let entry = RouteEntry::view("/", "SearchRecipes").unwrap();
    assert_eq!(entry.pattern, "/");
    assert!(entry.segments.is_empty());
    assert!(entry.matches("/", false).is_some());
    assert!(entry.matches("/login", false).is_none());
}

#[test]
fn test_invalid_patterns_rejected() {
    assert!(matches!(
        RouteEntry::view("/recipe/:", "RecipeDetail"),
        Err(RouteError::InvalidPattern { .. })
    ));
    assert!(matches!(
        RouteEntry::view("/recipe/:re-cipe", "RecipeDetail"),
        Err(RouteError::InvalidPattern { .. })
    ));
    assert!(matches!(
        RouteEntry::view("/*rest/more", "Docs"),
        Err(RouteError::InvalidPattern { .. })
    ));
    assert!(matches!(
        RouteEntry::view("/a/:x/b/:x", "X"),
        Err(RouteError::DuplicateParam { .. })
    ));
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_declaration_order_beats_specificity() {
    // A dynamic entry declared first shadows a later static one
    let table = RouteTable::new()
        .with_route(RouteEntry::view("/recipe/:id", "RecipeDetail").unwrap())
        .with_route(RouteEntry::view("/recipe/new", "RecipeEditor").unwrap());

    let nav = table.resolve("/recipe/new").unwrap();
    assert_eq!(nav.view, "RecipeDetail");
    assert_eq!(nav.params().get("id"), Some(&"new".to_string()));
}

#[test]
fn test_trailing_slash_and_query_ignored() {
    let table = TableVersion::Initial.table().unwrap();

    for location in ["/login", "/login/", "//login", "/login?next=/", "/login#form"] {
        let nav = table.resolve(location).unwrap();
        assert_eq!(nav.view, views::LOGIN, "{location}");
        assert_eq!(nav.path, "/login");
    }
}

#[test]
fn test_case_sensitive_by_default() {
    let table = TableVersion::Initial.table().unwrap();
    assert!(table.resolve("/Login").unwrap_err().is_not_found());

    let table = table.with_case_sensitivity(true);
    assert_eq!(table.resolve("/Login").unwrap().view, views::LOGIN);
    assert_eq!(
        table.resolve("/RECIPE/AbC").unwrap().params().get("id"),
        Some(&"AbC".to_string())
    );
}

#[test]
fn test_percent_decoded_params() {
    let table = TableVersion::Initial.table().unwrap();
    let nav = table.resolve("/recipe/cr%C3%A8me%20br%C3%BBl%C3%A9e").unwrap();
    assert_eq!(nav.params().get("id"), Some(&"crème brûlée".to_string()));
}

#[test]
fn test_wildcard_fallback() {
    let table = TableVersion::Paginated
        .table()
        .unwrap()
        .with_route(RouteEntry::view("/:pathMatch(.*)*", "NotFound").unwrap());

    let nav = table.resolve("/some/deep/path").unwrap();
    assert_eq!(nav.view, "NotFound");
    assert_eq!(
        nav.params().get("pathMatch"),
        Some(&"some/deep/path".to_string())
    );

    // Earlier entries still win
    assert_eq!(table.resolve("/bookmarks").unwrap().view, views::BOOKMARKS);
}

#[test]
fn test_normalize_path_cow() {
    assert!(matches!(normalize_path("/bookmarks"), Cow::Borrowed(_)));
    assert!(matches!(normalize_path("/bookmarks/"), Cow::Owned(_)));
    assert!(is_valid_path("/page/1"));
    assert_eq!(request_path("/page/1/?x=1", None), "/page/1");
}

// ============================================================================
// Redirects
// ============================================================================

#[test]
fn test_redirect_with_params() {
    let table = RouteTable::new()
        .with_route(RouteEntry::redirect("/recipes/:id", "/recipe/:id").unwrap())
        .with_route(RouteEntry::view("/recipe/:id", "RecipeDetail").unwrap().with_props());

    let nav = table.resolve("/recipes/7").unwrap();
    assert_eq!(nav.path, "/recipe/7");
    assert_eq!(nav.props().get("id"), Some(&"7".to_string()));
    assert_eq!(nav.redirected_from, vec!["/recipes/7".to_string()]);
}

#[test]
fn test_redirect_chain() {
    let table = RouteTable::new().with_routes([
        RouteEntry::redirect("/", "/home").unwrap(),
        RouteEntry::redirect("/home", "/page/1").unwrap(),
        RouteEntry::view("/page/:pageNumber", "SearchRecipes").unwrap(),
    ]);

    let nav = table.resolve("/").unwrap();
    assert_eq!(nav.path, "/page/1");
    assert_eq!(
        nav.redirected_from,
        vec!["/".to_string(), "/home".to_string()]
    );
}

#[test]
fn test_redirect_to_undeclared_path_is_not_found() {
    let table = RouteTable::new().with_route(RouteEntry::redirect("/", "/page/1").unwrap());
    assert_eq!(
        table.resolve("/").unwrap_err(),
        RouteError::NotFound {
            path: "/page/1".to_string()
        }
    );
}

#[test]
fn test_self_redirect_is_loop() {
    let table = RouteTable::new().with_route(RouteEntry::redirect("/loop", "/loop").unwrap());
    assert!(matches!(
        table.resolve("/loop"),
        Err(RouteError::RedirectLoop { hops: 1, .. })
    ));
}

#[test]
fn test_history_base_overlapping_app_paths() {
    let mut navigator = Navigator::new(
        TableVersion::Paginated
            .table()
            .unwrap()
            .with_base_path("/page"),
    );

    let nav = navigator.table().resolve("/page").unwrap();
    assert_eq!(nav.path, "/page/1");
    assert_eq!(nav.view, views::SEARCH_RECIPES);

    navigator.navigate("/page/page/4").unwrap();
    navigator.navigate("/page/login").unwrap();
    let back = navigator.back().unwrap().unwrap();
    assert_eq!(back.navigation.path, "/page/4");
    assert_eq!(back.navigation.params().get("pageNumber"), Some(&"4".to_string()));
}

// ============================================================================
// Named Routes
// ============================================================================

#[test]
fn test_url_for_named_route() {
    let table = RouteTable::new()
        .with_route(
            RouteEntry::view("/recipe/:id", "RecipeDetail")
                .unwrap()
                .with_name("recipe"),
        )
        .with_route(RouteEntry::view("/", "SearchRecipes").unwrap().with_name("home"));

    assert_eq!(
        table.url_for_params("recipe", &[("id", "42")]),
        Some("/recipe/42".to_string())
    );
    assert_eq!(table.url_for_params("home", &[]), Some("/".to_string()));
    assert_eq!(table.url_for_params("recipe", &[("slug", "x")]), None);

    assert_eq!(table.url_for_params("recipe", &[("id", "")]), None);

    let url = table.url_for_params("recipe", &[("id", "a b")]).unwrap();
    assert_eq!(table.resolve(&url).unwrap().params().get("id"), Some(&"a b".to_string()));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("recipe-router-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("routes.toml");

    let config = RouterConfig::from_version(TableVersion::Paginated).unwrap();
    std::fs::write(&file, config.to_toml().unwrap()).unwrap();

    let loaded = RouterConfig::load(&file).unwrap();
    assert_eq!(loaded, config);

    let table = loaded.build_table().unwrap();
    assert_eq!(table.resolve("/").unwrap().path, "/page/1");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_key_must_be_captured() {
    let config = RouterConfig::parse(
        r#"
        [[routes]]
        path = "/recipe/:id"
        view = "RecipeDetail"
        key = "recipeId"
    "#,
    )
    .unwrap();
    assert!(matches!(
        config.build_table(),
        Err(RouteError::UnknownKeyParam { .. })
    ));
}

#[test]
fn test_config_parse_error_has_context() {
    let dir = std::env::temp_dir().join(format!("recipe-router-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("routes.toml");
    std::fs::write(&file, "[[routes]\npath = ").unwrap();

    let err = RouterConfig::load(&file).unwrap_err();
    assert!(err.to_string().contains("Failed to parse route config"));

    std::fs::remove_dir_all(&dir).unwrap();
}
