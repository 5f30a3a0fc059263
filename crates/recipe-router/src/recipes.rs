//! Route tables of the recipe search application
//!
//! The app went through three table layouts. [`TableVersion::table`] builds
//! each of them exactly as it was declared.

use std::fmt;
use std::str::FromStr;

use crate::view::views;
use crate::{RouteEntry, RouteError, RouteKey, RouteTable};

/// Successive layouts of the recipe app's route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableVersion {
    /// `/` renders the search view directly; recipe detail keyed on `id`
    Initial,
    /// `/` redirects to `/page/1`; adds bookmarks and suggestions
    Paginated,
    /// Suggestions are grouped in folders: `/suggestions/:folderId`
    Folders,
}

impl TableVersion {
    pub const ALL: [TableVersion; 3] = [
        TableVersion::Initial,
        TableVersion::Paginated,
        TableVersion::Folders,
    ];

    pub fn latest() -> Self {
        TableVersion::Folders
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableVersion::Initial => "initial",
            TableVersion::Paginated => "paginated",
            TableVersion::Folders => "folders",
        }
    }

    /// Declared entries, in order
    pub fn entries(&self) -> Result<Vec<RouteEntry>, RouteError> {
        match self {
            TableVersion::Initial => initial_entries(),
            TableVersion::Paginated => paginated_entries(false),
            TableVersion::Folders => paginated_entries(true),
        }
    }

    pub fn table(&self) -> Result<RouteTable, RouteError> {
        Ok(RouteTable::new().with_routes(self.entries()?))
    }
}

impl Default for TableVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for TableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "initial" | "v1" => Ok(TableVersion::Initial),
            "paginated" | "v2" => Ok(TableVersion::Paginated),
            "folders" | "v3" => Ok(TableVersion::Folders),
            other => Err(format!(
                "unknown table version `{}` (expected initial, paginated or folders)",
                other
            )),
        }
    }
}

fn initial_entries() -> Result<Vec<RouteEntry>, RouteError> {
    Ok(vec![
        RouteEntry::view("/", views::SEARCH_RECIPES)?,
        RouteEntry::view("/recipe/:id", views::RECIPE_DETAIL)?
            .with_props()
            .with_key(RouteKey::param("id"))?,
        RouteEntry::view("/login", views::LOGIN)?,
        RouteEntry::view("/register", views::REGISTER)?,
    ])
}

fn paginated_entries(folders: bool) -> Result<Vec<RouteEntry>, RouteError> {
    let suggestions = if folders {
        RouteEntry::view("/suggestions/:folderId", views::SUGGESTIONS)?.with_props()
    } else {
        RouteEntry::view("/suggestions", views::SUGGESTIONS)?
    };

    Ok(vec![
        RouteEntry::redirect("/", "/page/1")?,
        RouteEntry::view("/page/:pageNumber", views::SEARCH_RECIPES)?.with_props(),
        RouteEntry::view("/recipe/:id", views::RECIPE_DETAIL)?.with_props(),
        RouteEntry::view("/login", views::LOGIN)?,
        RouteEntry::view("/register", views::REGISTER)?,
        RouteEntry::view("/bookmarks", views::BOOKMARKS)?,
        suggestions,
    ])
}
