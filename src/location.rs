//! Ambient location context.
//!
//! The navigator never reads a global. It asks a [`LocationSource`] for the
//! current host, pathname and search string, fresh on every call.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use url::Url;

/// Read-only access to the hosting environment's current location.
pub trait LocationSource {
    /// Host name, including a non-default port.
    fn host(&self) -> String;

    fn pathname(&self) -> String;

    /// Search string, including the leading `?` when non-empty.
    fn search(&self) -> String;

    /// The URL cache-aware navigation rewrites into: pathname followed by
    /// search.
    fn current_url(&self) -> String {
        let mut url = self.pathname();
        url.push_str(&self.search());
        url
    }
}

/// A snapshot of the ambient location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbientLocation {
    pub host: String,
    pub pathname: String,
    pub search: String,
}

impl AmbientLocation {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        pathname: impl Into<String>,
        search: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Splits an absolute href the way a browser's location object does.
    ///
    /// Returns `None` for relative or host-less input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use webcache_location::AmbientLocation;
    ///
    /// let loc = AmbientLocation::from_href(
    ///     "http://webcache.example:3000/search?q=cache:example.com/a",
    /// )
    /// .unwrap_or_default();
    /// assert_eq!(loc.host, "webcache.example:3000");
    /// assert_eq!(loc.pathname, "/search");
    /// assert_eq!(loc.search, "?q=cache:example.com/a");
    /// ```
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        let url = Url::parse(href.trim()).ok()?;
        let host = match (url.host_str()?, url.port()) {
            (host, Some(port)) => format!("{host}:{port}"),
            (host, None) => host.to_string(),
        };
        let search = url.query().map_or_else(String::new, |q| format!("?{q}"));

        Some(Self {
            host,
            pathname: url.path().to_string(),
            search,
        })
    }
}

impl LocationSource for AmbientLocation {
    fn host(&self) -> String {
        self.host.clone()
    }

    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn search(&self) -> String {
        self.search.clone()
    }
}

impl<L: LocationSource + ?Sized> LocationSource for &L {
    fn host(&self) -> String {
        (**self).host()
    }

    fn pathname(&self) -> String {
        (**self).pathname()
    }

    fn search(&self) -> String {
        (**self).search()
    }
}

/// Shared, updatable location. The environment writes, the navigator reads.
impl<L: LocationSource> LocationSource for Rc<RefCell<L>> {
    fn host(&self) -> String {
        self.borrow().host()
    }

    fn pathname(&self) -> String {
        self.borrow().pathname()
    }

    fn search(&self) -> String {
        self.borrow().search()
    }
}
