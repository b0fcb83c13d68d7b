//! Resolve url paths to views.
//!
//! The [`Router`] owns an immutable [`RouteTable`] and a [`History`] backend. Every navigation
//! produces a [`Resolution`]: either the view registered for the path or `NotFound`. There is no
//! catch-all route, what to show for `NotFound` is up to the host app.
//!
//! ```
//! use euca_router::{Router, RouteTable, MemoryHistory, Resolution, ViewId};
//!
//! let routes: RouteTable = RouteTable::new()
//!     .route("/", "DefaultView")
//!     .route("/numberbus", "NumberBus");
//!
//! let mut router = Router::initialize(routes, MemoryHistory::default()).unwrap();
//!
//! assert_eq!(router.resolve("/numberbus"), Resolution::View(ViewId::from("NumberBus")));
//! assert!(router.resolve("/missing").is_not_found());
//! ```
//!
//! [`Router`]: struct.Router.html
//! [`RouteTable`]: ../route/struct.RouteTable.html
//! [`History`]: ../history/trait.History.html
//! [`Resolution`]: enum.Resolution.html

use std::collections::HashMap;
use crate::error::{ConfigurationError, HistoryError};
use crate::history::{History, HistoryMode, MemoryHistory};
use crate::route::{RouteTable, ViewId};

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<View = ViewId> {
    /// The path matched a route, this view should be displayed.
    View(View),
    /// No route matched the contained path.
    NotFound(String),
}

impl<View> Resolution<View> {
    /// The matched view, if any.
    pub fn view(&self) -> Option<&View> {
        match self {
            Resolution::View(view) => Some(view),
            Resolution::NotFound(_) => None,
        }
    }

    /// Whether no route matched.
    pub fn is_not_found(&self) -> bool {
        match self {
            Resolution::View(_) => false,
            Resolution::NotFound(_) => true,
        }
    }
}

/// Maps paths to views and tracks the active one.
#[derive(Debug)]
pub struct Router<View = ViewId, H = MemoryHistory> {
    routes: RouteTable<View>,
    index: HashMap<String, usize>,
    history: H,
    current: Option<Resolution<View>>,
}

impl<View, H> Router<View, H>
where
    View: Clone,
    H: History,
{
    /// Build a router for the given routes.
    ///
    /// Fails if two routes share a path or if a path doesn't start with `/`. The router starts out
    /// unresolved, call [`sync`] to resolve the initial location.
    ///
    /// [`sync`]: #method.sync
    pub fn initialize(routes: RouteTable<View>, history: H) -> Result<Self, ConfigurationError> {
        let index = routes.index()?;

        log::debug!("initialized router with {} routes ({} history)", routes.len(), history.mode());

        Ok(Router {
            routes,
            index,
            history,
            current: None,
        })
    }

    /// Find the view registered for exactly `path` without changing the current view.
    pub fn lookup(&self, path: &str) -> Option<&View> {
        self.index.get(path)
            .and_then(|&i| self.routes.get(i))
            .map(|route| &route.view)
    }

    /// Resolve `path` and make the result the current view.
    pub fn resolve(&mut self, path: &str) -> Resolution<View> {
        self.apply(path).clone()
    }

    /// The result of the most recent resolution, `None` before the first one.
    pub fn current_view(&self) -> Option<&Resolution<View>> {
        self.current.as_ref()
    }

    /// Point the location at `path` and resolve it.
    ///
    /// `path` is resolved the way it reads back from the location, so a missing leading `/` is
    /// added, a `?query` is dropped and percent-escapes are decoded. A later [`sync`] gives the same
    /// result. If the location can't be updated the current view is left as is.
    ///
    /// With a [`browser::listen`] listener attached, the browser fires `hashchange` after the hash
    /// is set and the listener's callback runs for this navigation as well. Render from that
    /// callback, not from the value returned here, or the view is rendered twice.
    ///
    /// [`sync`]: #method.sync
    /// [`browser::listen`]: ../browser/fn.listen.html
    pub fn navigate(&mut self, path: &str) -> Result<&Resolution<View>, HistoryError> {
        self.history.push(path)?;
        let path = self.history.mode().normalize(path);
        Ok(self.apply(&path))
    }

    /// Resolve whatever the location currently points at.
    ///
    /// Call this once at startup and whenever the location changes outside of [`navigate`].
    ///
    /// [`navigate`]: #method.navigate
    pub fn sync(&mut self) -> Result<&Resolution<View>, HistoryError> {
        let path = self.history.current_path()?;
        Ok(self.apply(&path))
    }

    fn apply(&mut self, path: &str) -> &Resolution<View> {
        let resolution = match self.lookup(path) {
            Some(view) => {
                log::debug!("resolved route {}", path);
                Resolution::View(view.clone())
            }
            None => {
                log::warn!("no route for {}", path);
                Resolution::NotFound(path.to_owned())
            }
        };

        self.current.insert(resolution)
    }
}

impl<View, H: History> Router<View, H> {
    /// The routes this router was built with.
    pub fn routes(&self) -> &RouteTable<View> {
        &self.routes
    }

    /// The history backend.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The addressing strategy in use.
    pub fn history_mode(&self) -> HistoryMode {
        self.history.mode()
    }
}
