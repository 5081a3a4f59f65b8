//! Configuration options for navigator selection and default normalization.
//!
//! The `Options` struct is deserializable so host applications can carry it in
//! their own config files. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::WEBCACHE_HOST_TOKEN;

/// Configuration options for webcache-location.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use webcache_location::Options;
///
/// let options = Options {
///     base_href: "/app".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.host_token, "webcache");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Substring of the ambient host that activates cache-aware navigation.
    ///
    /// The test is a plain, case-sensitive substring match.
    ///
    /// Default: `"webcache"`
    pub host_token: String,

    /// Base href stripped by the default normalization.
    ///
    /// Used by `MemoryHistory::with_options`.
    ///
    /// Default: `""`
    pub base_href: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            host_token: WEBCACHE_HOST_TOKEN.to_string(),
            base_href: String::new(),
        }
    }
}

impl Options {
    /// Checks the options for values that would make selection meaningless.
    ///
    /// An empty `host_token` is a substring of every host and is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.host_token.is_empty() {
            return Err(Error::Config("host_token must not be empty".to_string()));
        }
        Ok(())
    }
}
