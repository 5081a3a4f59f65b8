//! # webcache-location
//!
//! Location handling for single-page apps viewed through a search engine's
//! cached-page viewer.
//!
//! The viewer serves a page under a URL like
//! `https://webcache.example/search?q=cache:https://site.com/courses`. A
//! client-side router running inside that page sees the viewer's address, not
//! the original site's. This crate unwraps those URLs for the router and
//! re-wraps every navigation so the viewer keeps serving the app.
//!
//! ## Quick Start
//!
//! ```rust
//! use webcache_location::{select_navigator, AmbientLocation, MemoryHistory, Navigator};
//!
//! let location = AmbientLocation::new(
//!     "webcache.example",
//!     "/search",
//!     "?q=cache:https://site.com/",
//! );
//! let mut nav = select_navigator("webcache.example", MemoryHistory::new(), location);
//!
//! nav.navigate("courses", "");
//! let pushed = nav.strategy().current().map(|e| e.url.clone());
//! assert_eq!(pushed.as_deref(), Some("/search?q=cache:https://site.com/courses"));
//!
//! assert_eq!(nav.normalize("/search?q=cache:https://site.com/courses/"), "/courses");
//! ```
//!
//! ## Pieces
//!
//! - [`extract_path`] and [`build_wrapped_url`]: the two URL transformations
//! - [`Navigator`]: cache-aware and pass-through implementations
//! - [`select_navigator`]: one-time choice based on the ambient host

mod error;
mod options;
mod patterns;

/// Cache-wrapped URL parsing, path extraction and rewriting.
pub mod wrapped;

/// Ambient location context.
pub mod location;

/// History-strategy collaborator and default normalization.
pub mod history;

/// Navigators and host-based selection.
pub mod navigator;

// Public API - re-exports
pub use error::{Error, Result};
pub use history::{normalize_url, HistoryEntry, HistoryStrategy, MemoryHistory};
pub use location::{AmbientLocation, LocationSource};
pub use navigator::{
    is_webcache_host, provide_navigator, select_navigator, select_navigator_with_options,
    CacheAwareNavigator, Navigator, PassThroughNavigator, SelectedNavigator,
};
pub use options::Options;
pub use patterns::WEBCACHE_HOST_TOKEN;
pub use wrapped::{
    build_wrapped_url, decode_escapes, extract_path, resolve_cached_url, try_build_wrapped_url,
    WrappedUrl,
};
