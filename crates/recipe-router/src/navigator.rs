//! Navigation state
//!
//! The [`Navigator`] sits on top of an immutable [`RouteTable`] and decides,
//! for each navigation event, whether the view on screen can be reused or
//! has to be instantiated again.

use tracing::{debug, info};

use crate::{Navigation, RouteError, RouteTable};

/// What the view layer should do with the resolved view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    /// Create the view: first navigation or a different entry matched
    Mount,
    /// Same entry but its render key changed; drop and recreate the view
    Remount,
    /// Same entry, keep the instance and hand it the new props
    Reuse,
}

/// A successful navigation and the render action it implies
#[derive(Debug, Clone)]
pub struct Transition {
    pub navigation: Navigation,
    pub action: RenderAction,
}

/// Decides the render action between two consecutive navigations
///
/// Entries are compared by declaration index. Without a key function the
/// same entry is always reused, whatever its params.
pub fn render_action(previous: Option<&Navigation>, next: &Navigation) -> RenderAction {
    let Some(previous) = previous else {
        return RenderAction::Mount;
    };

    if previous.matched.index != next.matched.index {
        return RenderAction::Mount;
    }

    match (previous.render_key(), next.render_key()) {
        (Some(before), Some(after)) if before != after => RenderAction::Remount,
        _ => RenderAction::Reuse,
    }
}

/// Single-threaded navigation driver
///
/// # Examples
///
/// ```
/// use recipe_router::{Navigator, RenderAction, TableVersion};
///
/// let mut navigator = Navigator::new(TableVersion::Initial.table().unwrap());
///
/// let first = navigator.navigate("/recipe/1").unwrap();
/// assert_eq!(first.action, RenderAction::Mount);
///
/// let second = navigator.navigate("/recipe/2").unwrap();
/// assert_eq!(second.action, RenderAction::Remount);
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    current: Option<Navigation>,
    history: Vec<String>,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            current: None,
            history: Vec::new(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Paths navigated to before the current one, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Resolves `location` and makes it current
    ///
    /// A failed resolution leaves the current navigation untouched.
    pub fn navigate(&mut self, location: &str) -> Result<Transition, RouteError> {
        let navigation = self.table.resolve(location)?;
        let action = render_action(self.current.as_ref(), &navigation);

        info!(
            path = %navigation.path,
            view = %navigation.view,
            ?action,
            "navigated"
        );

        if let Some(previous) = self.current.replace(navigation.clone()) {
            self.history.push(previous.path);
        }

        Ok(Transition { navigation, action })
    }

    /// Returns to the previous path, resolving it again
    ///
    /// History holds app paths, so the base path is not stripped again.
    /// `None` when there is nothing to go back to.
    pub fn back(&mut self) -> Option<Result<Transition, RouteError>> {
        let previous = self.history.pop()?;
        debug!(path = %previous, "navigating back");

        let result = self.table.resolve_path(&previous).map(|navigation| {
            let action = render_action(self.current.as_ref(), &navigation);
            self.current = Some(navigation.clone());
            Transition { navigation, action }
        });

        if result.is_err() {
            self.history.push(previous);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RouteEntry, RouteKey};

    fn navigator() -> Navigator {
        Navigator::new(RouteTable::new().with_routes([
            RouteEntry::view("/page/:pageNumber", "SearchRecipes")
                .unwrap()
                .with_props(),
            RouteEntry::view("/recipe/:id", "RecipeDetail")
                .unwrap()
                .with_props()
                .with_key(RouteKey::param("id"))
                .unwrap(),
            RouteEntry::view("/login", "Login").unwrap(),
        ]))
    }

    #[test]
    fn test_first_navigation_mounts() {
        let mut nav = navigator();
        assert!(nav.current().is_none());
        let t = nav.navigate("/login").unwrap();
        assert_eq!(t.action, RenderAction::Mount);
        assert_eq!(nav.current().map(|n| n.path.as_str()), Some("/login"));
    }

    #[test]
    fn test_unkeyed_entry_is_reused() {
        let mut nav = navigator();
        nav.navigate("/page/1").unwrap();
        let t = nav.navigate("/page/2").unwrap();
        assert_eq!(t.action, RenderAction::Reuse);
        assert_eq!(t.navigation.props().get("pageNumber"), Some(&"2".to_string()));
    }

    #[test]
    fn test_keyed_entry_remounts_on_key_change() {
        let mut nav = navigator();
        nav.navigate("/recipe/1").unwrap();
        assert_eq!(nav.navigate("/recipe/2").unwrap().action, RenderAction::Remount);
        assert_eq!(nav.navigate("/recipe/2?tab=notes").unwrap().action, RenderAction::Reuse);
    }

    #[test]
    fn test_switching_entries_mounts() {
        let mut nav = navigator();
        nav.navigate("/recipe/1").unwrap();
        assert_eq!(nav.navigate("/login").unwrap().action, RenderAction::Mount);
    }

    #[test]
    fn test_failed_navigation_keeps_state() {
        let mut nav = navigator();
        nav.navigate("/login").unwrap();
        assert!(nav.navigate("/nonexistent").is_err());
        assert_eq!(nav.current().map(|n| n.path.as_str()), Some("/login"));
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_back() {
        let mut nav = navigator();
        assert!(nav.back().is_none());

        nav.navigate("/recipe/1").unwrap();
        nav.navigate("/recipe/2").unwrap();
        assert_eq!(nav.history(), &["/recipe/1".to_string()]);

        let t = nav.back().unwrap().unwrap();
        assert_eq!(t.action, RenderAction::Remount);
        assert_eq!(t.navigation.path, "/recipe/1");
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_back_keeps_paths_under_base() {
        // App path /page/4 starts with the base; going back must not strip it again
        let mut nav = Navigator::new(navigator().table().clone().with_base_path("/page"));
        nav.navigate("/page/page/4").unwrap();
        nav.navigate("/page/login").unwrap();
        assert_eq!(nav.history(), &["/page/4".to_string()]);

        let t = nav.back().unwrap().unwrap();
        assert_eq!(t.navigation.path, "/page/4");
        assert_eq!(t.action, RenderAction::Mount);
        assert_eq!(t.navigation.props().get("pageNumber"), Some(&"4".to_string()));
    }
}
