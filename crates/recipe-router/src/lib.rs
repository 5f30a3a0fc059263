//! # Recipe Router
//!
//! Client-side route table for the recipe search app:
//! - Static routes (`/login`)
//! - Named segments (`/recipe/:id`)
//! - Wildcards (`/docs/*rest`)
//! - Redirects (`/` → `/page/1`), including param carry-over
//! - Prop forwarding and keyed re-render
//!
//! ## Matching
//!
//! Entries are tried in declaration order and the first match wins. Before
//! matching, a location loses its query string and fragment, slashes are
//! normalized and the history base (if any) is stripped:
//! - Trailing slashes: `/login/` → `/login`
//! - Double slashes: `/page//2` → `/page/2`
//! - Query and fragment: `/page/2?sort=new#top` → `/page/2`
//!
//! ## Example
//!
//! ```
//! use recipe_router::{RouteEntry, RouteKey, RouteTable};
//!
//! let table = RouteTable::new()
//!     .with_route(RouteEntry::redirect("/", "/page/1").unwrap())
//!     .with_route(RouteEntry::view("/page/:pageNumber", "SearchRecipes").unwrap().with_props())
//!     .with_route(
//!         RouteEntry::view("/recipe/:id", "RecipeDetail")
//!             .unwrap()
//!             .with_props()
//!             .with_key(RouteKey::param("id"))
//!             .unwrap(),
//!     );
//!
//! let nav = table.resolve("/recipe/42").unwrap();
//! assert_eq!(nav.view, "RecipeDetail");
//! assert_eq!(nav.props().get("id"), Some(&"42".to_string()));
//!
//! assert_eq!(table.resolve("/").unwrap().path, "/page/1");
//! assert!(table.resolve("/nonexistent").unwrap_err().is_not_found());
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
mod key;
pub mod navigator;
pub mod path;
pub mod recipes;
pub mod route;
pub mod table;
pub mod view;

pub use config::{RouteConfig, RouterConfig, RoutingConfig};
pub use error::RouteError;
pub use key::RouteKey;
pub use navigator::{render_action, Navigator, RenderAction, Transition};
pub use path::{is_valid_path, normalize_path, request_path};
pub use recipes::TableVersion;
pub use route::{RouteEntry, RouteMatch, RouteTarget, Segment};
pub use table::{Navigation, Resolution, RouteTable, DEFAULT_MAX_REDIRECTS};
pub use view::{views, ViewId};

/// Captured parameter values keyed by segment name
pub type RouteParams = HashMap<String, String>;
