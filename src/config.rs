//! Load the route table from a declarative configuration document.
//!
//! ```toml
//! history = "hash"
//!
//! [[routes]]
//! path = "/"
//! view = "DefaultView"
//!
//! [[routes]]
//! path = "/numberbus"
//! view = "NumberBus"
//! ```

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;
#[cfg(target_arch = "wasm32")]
use crate::browser::BrowserHistory;
use crate::error::ConfigurationError;
use crate::history::{HistoryMode, MemoryHistory};
use crate::route::{RouteTable, ViewId};
use crate::router::Router;

/// Everything needed to build a [`Router`].
///
/// [`Router`]: ../router/struct.Router.html
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig<View = ViewId> {
    /// How routes are encoded in the url. Defaults to hash addressing.
    #[serde(default)]
    pub history: HistoryMode,
    /// The routes, in declaration order.
    #[serde(default = "RouteTable::new")]
    pub routes: RouteTable<View>,
}

impl<View: DeserializeOwned> RouterConfig<View> {
    /// Parse a configuration from a TOML string.
    ///
    /// Handy with `include_str!` for apps that bundle their route table.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| ConfigurationError::Io { path: path.to_owned(), source: e })?;

        log::debug!("loading routes from {}", path.display());
        Self::from_toml_str(&source)
    }
}

impl<View: Clone> RouterConfig<View> {
    /// Build a router that keeps its location in memory.
    pub fn into_router(self) -> Result<Router<View, MemoryHistory>, ConfigurationError> {
        Router::initialize(self.routes, MemoryHistory::new(self.history))
    }

    /// Build a router attached to the browser's address bar.
    #[cfg(target_arch = "wasm32")]
    pub fn into_browser_router(self) -> Result<Router<View, BrowserHistory>, ConfigurationError> {
        Router::initialize(self.routes, BrowserHistory::new(self.history))
    }
}
