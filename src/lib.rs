//! A hash addressed route table for Rust WASM front ends.
//!
//! Declare which view belongs to which path, then let the [`Router`] tell you which one to show.
//! Routes are matched exactly, there are no parameters or wildcards, and a path with no route
//! resolves to [`Resolution::NotFound`] so the app can decide what to display.
//!
//! The route lives in the fragment of the page url (`http://host/app/#/numberbus`), so the server
//! serving the app never needs to know about the route table.
//!
//! ```
//! use euca_router::{RouterConfig, Resolution, ViewId};
//!
//! let config: RouterConfig = RouterConfig::from_toml_str(r#"
//!     history = "hash"
//!
//!     [[routes]]
//!     path = "/"
//!     view = "DefaultView"
//!
//!     [[routes]]
//!     path = "/numberbus"
//!     view = "NumberBus"
//! "#).unwrap();
//!
//! let mut router = config.into_router().unwrap();
//!
//! let view = router.navigate("/numberbus").unwrap();
//! assert_eq!(view, &Resolution::View(ViewId::from("NumberBus")));
//! ```
//!
//! In the browser use [`RouterConfig::into_browser_router`] and [`browser::listen`] to follow the
//! address bar. Both are only available when building for `wasm32`.
//!
//! [`Router`]: router/struct.Router.html
//! [`Resolution::NotFound`]: router/enum.Resolution.html#variant.NotFound
//! [`RouterConfig::into_browser_router`]: config/struct.RouterConfig.html#method.into_browser_router
//! [`browser::listen`]: browser/fn.listen.html

#![deny(missing_docs)]

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
pub mod error;
pub mod history;
pub mod route;
pub mod router;

#[cfg(target_arch = "wasm32")]
pub use crate::browser::BrowserHistory;
pub use crate::config::RouterConfig;
pub use crate::error::{ConfigurationError, HistoryError};
pub use crate::history::{History, HistoryMode, MemoryHistory};
pub use crate::route::{Route, RouteTable, ViewId};
pub use crate::router::{Resolution, Router};
