//! Errors reported while building a router or talking to the browser's address bar.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A malformed route table or route configuration.
///
/// These are reported while the router is being built and mean the application can't start.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Two routes were registered for the same path.
    #[error("duplicate route path `{path}` (routes {first} and {second})")]
    DuplicatePath {
        /// The path registered more than once.
        path: String,
        /// Position of the first route with this path.
        first: usize,
        /// Position of the conflicting route.
        second: usize,
    },
    /// A route path that can never be produced by the address bar.
    #[error("route path `{path}` must start with `/`")]
    InvalidPath {
        /// The offending path.
        path: String,
    },
    /// The route configuration isn't valid TOML or doesn't have the expected shape.
    #[error("invalid route configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The route configuration couldn't be read.
    #[error("failed to read route configuration from {}: {source}", .path.display())]
    Io {
        /// The file we tried to read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Failure to read or update the current location.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// There is no `window` (we are not running in a browser).
    #[error("couldn't get window handle")]
    NoWindow,
    /// The window has no document.
    #[error("couldn't get document handle")]
    NoDocument,
    /// The browser rejected a location read or update.
    #[error("location error: {0}")]
    Location(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for HistoryError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        HistoryError::Location(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
