//! Route definitions and utilities
//!
//! This module defines the core route types: a literal URL path bound to a
//! symbolic name and a view handle.

use std::borrow::Borrow;
use std::fmt;

/// Symbolic identifier for a route, used for lookup independent of its path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteName(pub String);

impl RouteName {
    /// Create a new route name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for RouteName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Route definition binding a path to a name and a view
///
/// `V` is the view handle the table hands back on resolution. The table only
/// holds the handle; instantiating the view is the navigator's job.
#[derive(Debug, Clone)]
pub struct Route<V> {
    /// Literal URL path, always starting with `/`
    pub path: String,
    /// Symbolic name for this route
    pub name: RouteName,
    /// Handle to the view rendered for this route
    pub view: V,
    /// Optional description of what this route displays
    pub description: Option<String>,
}

impl<V> Route<V> {
    /// Create a new route for the given path, name and view
    pub fn new(path: impl Into<String>, name: impl Into<RouteName>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            description: None,
        }
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this route is bound to the root path
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}
