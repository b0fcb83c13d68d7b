//! The static table mapping url paths to views.
//!
//! A [`RouteTable`] is an ordered list of [`Route`] entries. It is built once when the app starts,
//! either in code or from a configuration file, and handed to a [`Router`] which never changes it.
//!
//! [`Route`]: struct.Route.html
//! [`RouteTable`]: struct.RouteTable.html
//! [`Router`]: ../router/struct.Router.html

use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use serde::{Serialize, Deserialize};
use crate::error::ConfigurationError;

/// An opaque identifier for a view rendered by the host app.
///
/// The router never looks inside a view identifier, it only stores it and hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    /// Create a view identifier.
    pub fn new(id: impl Into<String>) -> Self {
        ViewId(id.into())
    }

    /// The identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        ViewId(id.to_owned())
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        ViewId(id)
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

/// A single path to view mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route<View = ViewId> {
    /// The exact path this route matches, e.g. `/numberbus`.
    pub path: String,
    /// The view displayed when this route is active.
    pub view: View,
}

impl<View> Route<View> {
    /// Create a route.
    pub fn new(path: impl Into<String>, view: impl Into<View>) -> Self {
        Route {
            path: path.into(),
            view: view.into(),
        }
    }
}

/// The ordered collection of all routes in an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable<View = ViewId> {
    routes: Vec<Route<View>>,
}

impl<View> Default for RouteTable<View> {
    fn default() -> Self {
        RouteTable { routes: vec![] }
    }
}

impl<View> RouteTable<View> {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the end of the table.
    pub fn route(mut self, path: impl Into<String>, view: impl Into<View>) -> Self {
        self.routes.push(Route::new(path, view));
        self
    }

    /// Iterate over the routes in the order they were declared.
    pub fn iter(&self) -> slice::Iter<Route<View>> {
        self.routes.iter()
    }

    /// The number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Check the table and build an index from path to position.
    ///
    /// Every path must start with `/` and no path may appear twice.
    pub(crate) fn index(&self) -> Result<HashMap<String, usize>, ConfigurationError> {
        let mut index = HashMap::with_capacity(self.routes.len());

        for (i, route) in self.routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(ConfigurationError::InvalidPath { path: route.path.clone() });
            }

            if let Some(&first) = index.get(&route.path) {
                return Err(ConfigurationError::DuplicatePath {
                    path: route.path.clone(),
                    first: first,
                    second: i,
                });
            }

            index.insert(route.path.clone(), i);
        }

        Ok(index)
    }

    /// Get the route at the given position.
    pub(crate) fn get(&self, i: usize) -> Option<&Route<View>> {
        self.routes.get(i)
    }
}

impl<View> FromIterator<Route<View>> for RouteTable<View> {
    fn from_iter<I: IntoIterator<Item = Route<View>>>(iter: I) -> Self {
        RouteTable {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<View> From<Vec<Route<View>>> for RouteTable<View> {
    fn from(routes: Vec<Route<View>>) -> Self {
        RouteTable { routes }
    }
}

impl<'a, View> IntoIterator for &'a RouteTable<View> {
    type Item = &'a Route<View>;
    type IntoIter = slice::Iter<'a, Route<View>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declaration_order() {
        let table: RouteTable = RouteTable::new()
            .route("/", "DefaultView")
            .route("/numberbus", "NumberBus");

        let paths: Vec<_> = table.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/numberbus"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn index_positions() {
        let table: RouteTable = RouteTable::new()
            .route("/", "DefaultView")
            .route("/numberbus", "NumberBus");

        let index = table.index().expect("valid table");
        assert_eq!(index.get("/"), Some(&0));
        assert_eq!(index.get("/numberbus"), Some(&1));
    }

    #[test]
    fn duplicate_reports_both_positions() {
        let table: RouteTable = RouteTable::new()
            .route("/", "DefaultView")
            .route("/numberbus", "NumberBus")
            .route("/", "Other");

        match table.index() {
            Err(ConfigurationError::DuplicatePath { path, first, second }) => {
                assert_eq!(path, "/");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("expected duplicate path error, got {:?}", other),
        }
    }

    #[test]
    fn relative_path_rejected() {
        let table: RouteTable = RouteTable::new().route("numberbus", "NumberBus");

        assert!(matches!(
            table.index(),
            Err(ConfigurationError::InvalidPath { ref path }) if path == "numberbus"
        ));
    }

    #[test]
    fn empty_table_is_valid() {
        let table: RouteTable = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.index().expect("valid table").is_empty());
    }

    #[test]
    fn view_id_compares_with_str() {
        let view = ViewId::from("NumberBus");
        assert_eq!(view, "NumberBus");
        assert_eq!(view.as_str(), "NumberBus");
        assert_eq!(view.to_string(), "NumberBus");
    }
}
