//! Navigators and host-based selection.
//!
//! Two implementations share the [`Navigator`] interface:
//!
//! - [`CacheAwareNavigator`] rewrites every navigation into the cache
//!   viewer's wrapped URL and unwraps URLs before normalizing them.
//! - [`PassThroughNavigator`] hands everything to the history strategy
//!   unmodified.
//!
//! [`select_navigator`] picks one of them once, from the ambient host, and
//! the result is meant to be kept for the whole session.

use tracing::{debug, warn};

use crate::error::Result;
use crate::history::HistoryStrategy;
use crate::location::LocationSource;
use crate::options::Options;
use crate::patterns::WEBCACHE_HOST_TOKEN;
use crate::wrapped::{build_wrapped_url, extract_path, WrappedUrl};

/// The operations a router needs from its location service.
pub trait Navigator {
    /// Normalizes a URL into a router path.
    fn normalize(&self, url: &str) -> String;

    /// Navigates to `path`, pushing a new history entry.
    fn navigate(&mut self, path: &str, query: &str);

    /// Navigates to `path`, replacing the current history entry.
    fn replace(&mut self, path: &str, query: &str);
}

/// Navigator for pages served through the cache viewer.
#[derive(Debug, Clone)]
pub struct CacheAwareNavigator<H, L> {
    strategy: H,
    location: L,
}

impl<H: HistoryStrategy, L: LocationSource> CacheAwareNavigator<H, L> {
    #[must_use]
    pub fn new(strategy: H, location: L) -> Self {
        Self { strategy, location }
    }

    /// The wrapped URL a navigation to `path` would record.
    ///
    /// The ambient location is sampled on every call.
    pub fn wrapped_url_for(&self, path: &str) -> String {
        let current = self.location.current_url();
        if WrappedUrl::parse(&current).is_none() {
            warn!(%current, path, "current location is not a cache-wrapped URL; keeping it");
        }
        let url = build_wrapped_url(path, &current);
        debug!(path, %url, "rewrote navigation into cache viewer URL");
        url
    }

    pub fn strategy(&self) -> &H {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut H {
        &mut self.strategy
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn into_parts(self) -> (H, L) {
        (self.strategy, self.location)
    }
}

impl<H: HistoryStrategy, L: LocationSource> Navigator for CacheAwareNavigator<H, L> {
    fn normalize(&self, url: &str) -> String {
        self.strategy.normalize_default(&extract_path(url))
    }

    fn navigate(&mut self, path: &str, query: &str) {
        let url = self.wrapped_url_for(path);
        self.strategy.push_state(None, "", &url, query);
    }

    fn replace(&mut self, path: &str, query: &str) {
        let url = self.wrapped_url_for(path);
        self.strategy.replace_state(None, "", &url, query);
    }
}

/// Navigator that leaves every URL alone.
#[derive(Debug, Clone)]
pub struct PassThroughNavigator<H> {
    strategy: H,
}

impl<H: HistoryStrategy> PassThroughNavigator<H> {
    #[must_use]
    pub fn new(strategy: H) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &H {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut H {
        &mut self.strategy
    }

    pub fn into_inner(self) -> H {
        self.strategy
    }
}

impl<H: HistoryStrategy> Navigator for PassThroughNavigator<H> {
    fn normalize(&self, url: &str) -> String {
        self.strategy.normalize_default(url)
    }

    fn navigate(&mut self, path: &str, query: &str) {
        self.strategy.push_state(None, "", path, query);
    }

    fn replace(&mut self, path: &str, query: &str) {
        self.strategy.replace_state(None, "", path, query);
    }
}

/// The navigator chosen at composition time.
#[derive(Debug, Clone)]
pub enum SelectedNavigator<H, L> {
    CacheAware(CacheAwareNavigator<H, L>),
    PassThrough(PassThroughNavigator<H>),
}

impl<H: HistoryStrategy, L: LocationSource> SelectedNavigator<H, L> {
    #[must_use]
    pub fn is_cache_aware(&self) -> bool {
        matches!(self, Self::CacheAware(_))
    }

    pub fn strategy(&self) -> &H {
        match self {
            Self::CacheAware(nav) => nav.strategy(),
            Self::PassThrough(nav) => nav.strategy(),
        }
    }

    pub fn strategy_mut(&mut self) -> &mut H {
        match self {
            Self::CacheAware(nav) => nav.strategy_mut(),
            Self::PassThrough(nav) => nav.strategy_mut(),
        }
    }
}

impl<H: HistoryStrategy, L: LocationSource> Navigator for SelectedNavigator<H, L> {
    fn normalize(&self, url: &str) -> String {
        match self {
            Self::CacheAware(nav) => nav.normalize(url),
            Self::PassThrough(nav) => nav.normalize(url),
        }
    }

    fn navigate(&mut self, path: &str, query: &str) {
        match self {
            Self::CacheAware(nav) => nav.navigate(path, query),
            Self::PassThrough(nav) => nav.navigate(path, query),
        }
    }

    fn replace(&mut self, path: &str, query: &str) {
        match self {
            Self::CacheAware(nav) => nav.replace(path, query),
            Self::PassThrough(nav) => nav.replace(path, query),
        }
    }
}

/// Whether `host` is served by the cache viewer.
///
/// Plain, case-sensitive substring test against `webcache`.
#[must_use]
pub fn is_webcache_host(host: &str) -> bool {
    host.contains(WEBCACHE_HOST_TOKEN)
}

fn host_matches(host: &str, options: &Options) -> bool {
    host.contains(options.host_token.as_str())
}

/// Picks the navigator for `host`.
///
/// Call this once at startup and keep the result; the host is not
/// re-examined on later navigations.
///
/// # Example
///
/// ```rust
/// use webcache_location::{select_navigator, AmbientLocation, MemoryHistory};
///
/// let nav = select_navigator(
///     "webcache.googleusercontent.com",
///     MemoryHistory::new(),
///     AmbientLocation::default(),
/// );
/// assert!(nav.is_cache_aware());
/// ```
pub fn select_navigator<H, L>(host: &str, strategy: H, location: L) -> SelectedNavigator<H, L>
where
    H: HistoryStrategy,
    L: LocationSource,
{
    select(host, strategy, location, &Options::default())
}

/// Like [`select_navigator`], with the host token taken from `options`.
pub fn select_navigator_with_options<H, L>(
    host: &str,
    strategy: H,
    location: L,
    options: &Options,
) -> Result<SelectedNavigator<H, L>>
where
    H: HistoryStrategy,
    L: LocationSource,
{
    options.validate()?;
    Ok(select(host, strategy, location, options))
}

/// Composition-root helper: reads the host from `location` and selects.
pub fn provide_navigator<H, L>(
    strategy: H,
    location: L,
    options: &Options,
) -> Result<SelectedNavigator<H, L>>
where
    H: HistoryStrategy,
    L: LocationSource,
{
    let host = location.host();
    select_navigator_with_options(&host, strategy, location, options)
}

fn select<H, L>(host: &str, strategy: H, location: L, options: &Options) -> SelectedNavigator<H, L>
where
    H: HistoryStrategy,
    L: LocationSource,
{
    if host_matches(host, options) {
        debug!(host, "cache viewer host; using cache-aware navigator");
        SelectedNavigator::CacheAware(CacheAwareNavigator::new(strategy, location))
    } else {
        debug!(host, "using pass-through navigator");
        SelectedNavigator::PassThrough(PassThroughNavigator::new(strategy))
    }
}
