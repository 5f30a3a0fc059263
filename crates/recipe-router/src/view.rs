//! View identifiers
//!
//! The router never renders anything; it hands an opaque [`ViewId`] to
//! whatever renders pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a page view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(name: impl Into<String>) -> Self {
        ViewId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(name: &str) -> Self {
        ViewId::new(name)
    }
}

impl From<String> for ViewId {
    fn from(name: String) -> Self {
        ViewId(name)
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Views of the recipe search application
pub mod views {
    pub const SEARCH_RECIPES: &str = "SearchRecipes";
    pub const RECIPE_DETAIL: &str = "RecipeDetail";
    pub const LOGIN: &str = "Login";
    pub const REGISTER: &str = "Register";
    pub const BOOKMARKS: &str = "Bookmarks";
    pub const SUGGESTIONS: &str = "Suggestions";
}
