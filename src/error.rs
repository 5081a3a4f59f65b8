//! Error types for webcache-location.
//!
//! The URL transformations themselves are total and never fail. These errors
//! only come out of the opt-in strict entry points and option validation.

/// Error type for strict rewriting and configuration checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The URL does not carry the `q=cache:` wrapping structure.
    #[error("not a cache-wrapped URL: {url}")]
    NotWrapped {
        /// The offending URL, as given.
        url: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for webcache-location operations.
pub type Result<T> = std::result::Result<T, Error>;
