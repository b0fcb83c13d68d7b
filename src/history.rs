//! Addressing strategies and the history backends that track the current location.
//!
//! A [`HistoryMode`] decides which part of the page url holds the route path. A [`History`]
//! implementation knows where the current url lives: in the browser's address bar
//! ([`BrowserHistory`]) or in memory ([`MemoryHistory`]).
//!
//! [`HistoryMode`]: enum.HistoryMode.html
//! [`History`]: trait.History.html
//! [`BrowserHistory`]: ../browser/struct.BrowserHistory.html
//! [`MemoryHistory`]: struct.MemoryHistory.html

use std::borrow::Cow;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::error::HistoryError;

/// How the route path is encoded in the page url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum HistoryMode {
    /// The route lives in the fragment, `http://host/app/#/numberbus`.
    ///
    /// The server only ever sees the part before the `#`, so it doesn't need to know anything
    /// about the route table.
    Hash,
}

impl Default for HistoryMode {
    fn default() -> Self {
        HistoryMode::Hash
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryMode::Hash => f.write_str("hash"),
        }
    }
}

impl HistoryMode {
    /// Extract the route path from a full url.
    ///
    /// ```
    /// use euca_router::HistoryMode;
    ///
    /// let mode = HistoryMode::Hash;
    /// assert_eq!(mode.path_from_url("http://localhost:8080/#/numberbus"), "/numberbus");
    /// assert_eq!(mode.path_from_url("http://localhost:8080/"), "/");
    /// ```
    pub fn path_from_url(&self, url: &str) -> String {
        match self {
            HistoryMode::Hash => {
                let fragment = match url.find('#') {
                    Some(i) => &url[i + 1..],
                    None => "",
                };

                // the query portion of the fragment isn't part of the route
                let path = match fragment.find('?') {
                    Some(i) => &fragment[..i],
                    None => fragment,
                };

                // browsers hand back the fragment percent-encoded, keep it as is if it isn't utf-8
                let path = match urlencoding::decode(path) {
                    Ok(decoded) => decoded,
                    Err(_) => Cow::Borrowed(path),
                };

                if path.starts_with('/') {
                    path.into_owned()
                }
                else {
                    format!("/{}", path)
                }
            }
        }
    }

    /// The route path that ends up in the location after navigating to `path`.
    ///
    /// ```
    /// use euca_router::HistoryMode;
    ///
    /// assert_eq!(HistoryMode::Hash.normalize("numberbus?tab=2"), "/numberbus");
    /// ```
    pub fn normalize(&self, path: &str) -> String {
        self.path_from_url(&self.fragment_for(path))
    }

    /// The value written to the url to make `path` the active route.
    pub fn fragment_for(&self, path: &str) -> String {
        match self {
            HistoryMode::Hash => format!("#{}", path),
        }
    }

    /// The full url after navigating from `url` to `path`.
    pub fn href_for(&self, url: &str, path: &str) -> String {
        match self {
            HistoryMode::Hash => {
                let base = match url.find('#') {
                    Some(i) => &url[..i],
                    None => url,
                };
                format!("{}{}", base, self.fragment_for(path))
            }
        }
    }

    /// The DOM events fired on `window` when the active route changes under this mode.
    pub fn events(&self) -> &'static [&'static str] {
        match self {
            HistoryMode::Hash => &["hashchange"],
        }
    }
}

/// Something that holds the current location.
pub trait History {
    /// The addressing strategy used by this history.
    fn mode(&self) -> HistoryMode;
    /// The route path of the current location.
    fn current_path(&self) -> Result<String, HistoryError>;
    /// Make `path` the current location.
    fn push(&mut self, path: &str) -> Result<(), HistoryError>;
}

/// A history that lives entirely in memory.
///
/// Useful for testing and for hosts without an address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    mode: HistoryMode,
    entries: Vec<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(HistoryMode::default())
    }
}

impl MemoryHistory {
    /// Create a history starting at `http://localhost/`.
    pub fn new(mode: HistoryMode) -> Self {
        Self::with_url(mode, "http://localhost/")
    }

    /// Create a history starting at the given url.
    pub fn with_url(mode: HistoryMode, url: impl Into<String>) -> Self {
        MemoryHistory {
            mode,
            entries: vec![url.into()],
        }
    }

    /// The current url.
    pub fn url(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("")
    }

    /// Every url visited, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn current_path(&self) -> Result<String, HistoryError> {
        Ok(self.mode.path_from_url(self.url()))
    }

    fn push(&mut self, path: &str) -> Result<(), HistoryError> {
        let href = self.mode.href_for(self.url(), path);
        self.entries.push(href);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_paths() {
        let mode = HistoryMode::Hash;

        assert_eq!(mode.path_from_url("http://localhost:8080"), "/");
        assert_eq!(mode.path_from_url("http://localhost:8080/"), "/");
        assert_eq!(mode.path_from_url("http://localhost:8080/#"), "/");
        assert_eq!(mode.path_from_url("http://localhost:8080/#/"), "/");
        assert_eq!(mode.path_from_url("http://localhost:8080/#/numberbus"), "/numberbus");
        assert_eq!(mode.path_from_url("http://localhost:8080/#numberbus"), "/numberbus");
        assert_eq!(mode.path_from_url("http://localhost:8080/app/#/numberbus?x=1"), "/numberbus");
    }

    #[test]
    fn encoded_fragment_is_decoded() {
        let mode = HistoryMode::Hash;

        assert_eq!(mode.path_from_url("http://localhost/#/pojazd%20ci%C4%99%C5%BCarowy"), "/pojazd ciężarowy");
        assert_eq!(mode.path_from_url("http://localhost/#/pojazd ciężarowy"), "/pojazd ciężarowy");
        assert_eq!(mode.path_from_url("http://localhost/#/a%20b?c=%20"), "/a b");
        // not utf-8 once decoded
        assert_eq!(mode.path_from_url("http://localhost/#/%FF"), "/%FF");
    }

    #[test]
    fn normalize_matches_location() {
        let mode = HistoryMode::Hash;

        for path in &["/", "", "/numberbus", "numberbus", "/numberbus?tab=2", "/a%20b", "/a b"] {
            assert_eq!(mode.normalize(path), mode.path_from_url(&mode.href_for("http://localhost/", path)));
        }
        assert_eq!(mode.normalize(""), "/");
        assert_eq!(mode.normalize("/numberbus?tab=2"), "/numberbus");
    }

    #[test]
    fn server_path_is_ignored() {
        let mode = HistoryMode::Hash;
        assert_eq!(mode.path_from_url("http://localhost:8080/numberbus"), "/");
    }

    #[test]
    fn href_replaces_fragment() {
        let mode = HistoryMode::Hash;

        assert_eq!(mode.href_for("http://localhost/", "/numberbus"), "http://localhost/#/numberbus");
        assert_eq!(mode.href_for("http://localhost/#/numberbus", "/"), "http://localhost/#/");
        assert_eq!(mode.fragment_for("/numberbus"), "#/numberbus");
    }

    #[test]
    fn hash_listens_for_hashchange() {
        assert_eq!(HistoryMode::Hash.events(), &["hashchange"]);
    }

    #[test]
    fn memory_history_push() {
        let mut history = MemoryHistory::default();
        assert_eq!(history.current_path(), Ok("/".to_owned()));

        history.push("/numberbus").expect("push");
        assert_eq!(history.url(), "http://localhost/#/numberbus");
        assert_eq!(history.current_path(), Ok("/numberbus".to_owned()));
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn mode_from_config_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            history: HistoryMode,
        }

        let w: Wrapper = toml::from_str(r#"history = "hash""#).expect("valid toml");
        assert_eq!(w.history, HistoryMode::Hash);
        assert!(toml::from_str::<Wrapper>(r#"history = "html5""#).is_err());
    }
}
