//! Navigator managing the current location and history
//!
//! This is the host side of routing: it receives navigation events, strips
//! the base path, resolves against the shared table and activates the
//! matching view. Each event runs to completion before the next one.

use super::base::BasePath;
use super::route::Route;
use super::table::RouteTable;
use crate::error::RouteError;
use crate::views::{Frame, RenderContext, Renderable, ViewRef};
use std::sync::Arc;
use tracing::debug;

/// Default number of history entries kept
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Outcome of a navigation event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// A route matched and its view is now active
    Activated { name: String, path: String },
    /// Nothing matched; the host shows its not-found page
    NotFound { location: String },
}

/// Location and history bookkeeping
#[derive(Debug, Clone)]
pub struct NavigatorState {
    /// Current full location, base path included
    pub current: String,
    /// Navigation history (most recent first)
    pub history: Vec<String>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl NavigatorState {
    /// Create a new state at the given location
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            history: Vec::new(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Move to a new location
    pub fn navigate_to(&mut self, location: String) {
        // Add current location to history if it's different
        if self.current != location && self.max_history > 0 {
            self.history.insert(0, self.current.clone());
            self.history.truncate(self.max_history);
        }

        self.current = location;
    }

    /// Go back to the previous location in history
    pub fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current = self.history.remove(0);
        true
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

/// The route currently on screen
struct ActiveRoute {
    index: usize,
    view: Box<dyn Renderable>,
}

/// Navigation mechanism driving the route table
pub struct Navigator {
    table: Arc<RouteTable<ViewRef>>,
    base: BasePath,
    state: NavigatorState,
    active: Option<ActiveRoute>,
}

impl Navigator {
    /// Create a navigator starting on the home route
    pub fn new(table: Arc<RouteTable<ViewRef>>, base: BasePath) -> Self {
        let initial = base.href(&table.home().path);
        let mut navigator = Self {
            table,
            base,
            state: NavigatorState::new(initial),
            active: None,
        };
        navigator.activate();
        navigator
    }

    /// Limit the history size; 0 disables history
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.state.max_history = max_history;
        self.state.history.truncate(max_history);
        self
    }

    /// Navigate to a full location such as `/app/bs`
    pub fn push(&mut self, location: impl Into<String>) -> Navigation {
        self.state.navigate_to(location.into());
        self.activate()
    }

    /// Navigate to a route by its symbolic name
    pub fn push_named(&mut self, name: &str) -> Result<Navigation, RouteError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        let location = self.base.href(&route.path);
        Ok(self.push(location))
    }

    /// Go back to the previous location
    pub fn go_back(&mut self) -> bool {
        if self.state.go_back() {
            self.activate();
            true
        } else {
            false
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Current full location
    pub fn current_location(&self) -> &str {
        &self.state.current
    }

    /// Navigation history (most recent first)
    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    /// Route currently on screen, `None` on the not-found page
    pub fn current_route(&self) -> Option<&Route<ViewRef>> {
        let index = self.active.as_ref()?.index;
        self.table.get(index)
    }

    /// Instance of the active view
    pub fn active_view(&self) -> Option<&dyn Renderable> {
        self.active.as_ref().map(|active| active.view.as_ref())
    }

    /// Render the active view
    pub fn render(&self, ctx: &RenderContext<'_>) -> Option<Frame> {
        self.active_view().map(|view| view.render(ctx))
    }

    /// Shared route table
    pub fn table(&self) -> &Arc<RouteTable<ViewRef>> {
        &self.table
    }

    /// Base path applied to every route
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    /// Resolve the current location and swap in its view
    fn activate(&mut self) -> Navigation {
        let location = self.state.current.clone();
        let table = Arc::clone(&self.table);
        let matched = self
            .base
            .strip(&location)
            .and_then(|path| table.position(&path))
            .and_then(|index| table.get(index).map(|route| (index, route)));

        match matched {
            Some((index, route)) => {
                let navigation = Navigation::Activated {
                    name: route.name.to_string(),
                    path: route.path.clone(),
                };
                debug!(location = %location, route = %route.name, view = route.view.name(), "activated route");
                let view = route.view.instantiate();
                self.active = Some(ActiveRoute { index, view });
                navigation
            }
            None => {
                debug!(location = %location, "no route matches location");
                self.active = None;
                Navigation::NotFound { location }
            }
        }
    }
}
