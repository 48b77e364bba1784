//! Immutable route table
//!
//! The table is registered once at startup and never mutated afterwards.
//! Extending it means building a new table.

use super::route::{Route, RouteName};
use crate::error::RouteError;
use std::collections::HashMap;
use tracing::debug;

/// Result type alias for route registration
pub type RouteResult<T> = std::result::Result<T, RouteError>;

/// Outcome of resolving a path against the table
///
/// An unresolved path is a normal outcome for the host to render, not a fault.
#[derive(Debug)]
pub enum Resolution<'a, V> {
    /// A registered route matched the path exactly
    Matched(&'a Route<V>),
    /// No registered path equals the input
    Unresolved { path: String },
}

impl<'a, V> Resolution<'a, V> {
    /// Whether a route matched
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    /// The matched route, if any
    pub fn route(&self) -> Option<&'a Route<V>> {
        match self {
            Resolution::Matched(route) => Some(*route),
            Resolution::Unresolved { .. } => None,
        }
    }

    /// The matched route's view, if any
    pub fn view(&self) -> Option<&'a V> {
        self.route().map(|route| &route.view)
    }
}

// Manual impl: `V` does not need to be `Clone`.
impl<V> Clone for Resolution<'_, V> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Matched(route) => Resolution::Matched(*route),
            Resolution::Unresolved { path } => Resolution::Unresolved { path: path.clone() },
        }
    }
}

/// Ordered, validated set of routes
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    names: HashMap<RouteName, usize>,
    home: usize,
}

impl<V> RouteTable<V> {
    /// Start building a table
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Register an ordered list of routes
    ///
    /// Fails if the list is empty, a path is malformed, a path or name is
    /// registered twice, or no route is bound to `/`.
    pub fn new(routes: Vec<Route<V>>) -> RouteResult<Self> {
        if routes.is_empty() {
            return Err(RouteError::NoRoutes);
        }

        let mut names = HashMap::with_capacity(routes.len());
        let mut paths: HashMap<&str, usize> = HashMap::with_capacity(routes.len());
        let mut home = None;

        for (index, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.clone()));
            }
            if route.name.as_str().is_empty() {
                return Err(RouteError::EmptyName(route.path.clone()));
            }
            if paths.insert(route.path.as_str(), index).is_some() {
                return Err(RouteError::DuplicatePath(route.path.clone()));
            }
            if names.insert(route.name.clone(), index).is_some() {
                return Err(RouteError::DuplicateName(route.name.0.clone()));
            }
            if route.is_root() {
                home = Some(index);
            }
        }

        let home = home.ok_or(RouteError::MissingRoot)?;
        debug!(routes = routes.len(), "registered route table");

        Ok(Self {
            routes,
            names,
            home,
        })
    }

    /// Resolve a path to its route
    ///
    /// Exact string match against the registered paths in registration
    /// order; the first match wins.
    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        match self.position(path) {
            Some(index) => Resolution::Matched(&self.routes[index]),
            None => Resolution::Unresolved {
                path: path.to_string(),
            },
        }
    }

    /// Registration index of the route [`RouteTable::resolve`] would match
    pub fn position(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.path == path)
    }

    /// Route at a registration index
    pub fn get(&self, index: usize) -> Option<&Route<V>> {
        self.routes.get(index)
    }

    /// Look up a route by its symbolic name
    pub fn by_name(&self, name: &str) -> Option<&Route<V>> {
        self.names.get(name).map(|&index| &self.routes[index])
    }

    /// The route bound to `/`
    pub fn home(&self) -> &Route<V> {
        &self.routes[self.home]
    }

    /// All routes in registration order
    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false for a successfully registered table
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder collecting routes before registration
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTableBuilder<V> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a route
    pub fn add_route(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self
    }

    /// Add a route from its parts
    pub fn route(self, path: impl Into<String>, name: impl Into<RouteName>, view: V) -> Self {
        self.add_route(Route::new(path, name, view))
    }

    /// Validate and register the collected routes
    pub fn build(self) -> RouteResult<RouteTable<V>> {
        RouteTable::new(self.routes)
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
