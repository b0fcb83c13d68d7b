//! Routing against the browser's address bar.
//!
//! [`BrowserHistory`] reads and writes `window.location`, and [`listen`] keeps a router in sync
//! when the user changes the url (typing in the address bar, back and forward buttons).
//!
//! [`BrowserHistory`]: struct.BrowserHistory.html
//! [`listen`]: fn.listen.html

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::error::HistoryError;
use crate::history::{History, HistoryMode};
use crate::router::{Resolution, Router};

/// A history backed by `window.location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserHistory {
    mode: HistoryMode,
}

impl BrowserHistory {
    /// Create a browser history using the given addressing strategy.
    pub fn new(mode: HistoryMode) -> Self {
        BrowserHistory { mode }
    }
}

fn window() -> Result<web_sys::Window, HistoryError> {
    web_sys::window().ok_or(HistoryError::NoWindow)
}

impl History for BrowserHistory {
    fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn current_path(&self) -> Result<String, HistoryError> {
        let url = window()?
            .document()
            .ok_or(HistoryError::NoDocument)?
            .url()?;

        Ok(self.mode.path_from_url(&url))
    }

    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        match self.mode {
            HistoryMode::Hash => {
                window()?.location().set_hash(path)?;
            }
        }

        Ok(())
    }
}

/// Event listeners registered by [`listen`].
///
/// The listeners are removed from the window when this is dropped.
///
/// [`listen`]: fn.listen.html
pub struct Listener {
    window: web_sys::Window,
    listeners: Vec<(&'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        for (event, listener) in self.listeners.drain(..) {
            if let Err(e) = self.window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
                log::error!("failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

/// Re-resolve the router every time the browser's location changes.
///
/// `on_change` receives the new resolution. The router is not borrowed while `on_change` runs, so
/// it is free to call [`Router::navigate`].
///
/// Setting the hash from [`Router::navigate`] fires `hashchange` too, so `on_change` also runs for
/// programmatic navigation. Render from `on_change` only, not from the value `navigate` returns,
/// or every programmatic navigation renders twice.
///
/// [`Router::navigate`]: ../router/struct.Router.html#method.navigate
pub fn listen<View, F>(router: Rc<RefCell<Router<View, BrowserHistory>>>, on_change: F)
-> Result<Listener, HistoryError>
where
    View: Clone + 'static,
    F: FnMut(&Resolution<View>) + 'static,
{
    let window = window()?;
    let mode = router.borrow().history_mode();
    let on_change = Rc::new(RefCell::new(on_change));

    let mut listener = Listener {
        window: window.clone(),
        listeners: vec![],
    };

    for &event in mode.events() {
        let router = Rc::clone(&router);
        let on_change = Rc::clone(&on_change);
        let closure = Closure::wrap(
            Box::new(move |_event| {
                let resolution = router.borrow_mut().sync().map(Clone::clone);
                match resolution {
                    Ok(resolution) => (&mut *on_change.borrow_mut())(&resolution),
                    Err(e) => log::error!("failed to sync route on {}: {}", event, e),
                }
            }) as Box<dyn FnMut(web_sys::Event)>
        );

        window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        listener.listeners.push((event, closure));
    }

    Ok(listener)
}
