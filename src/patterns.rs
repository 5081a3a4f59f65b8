//! Compiled regex patterns for cache-wrapped URLs.
//!
//! Patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Wrapped URL Pattern
// =============================================================================

/// Matches a cache-viewer URL.
///
/// Capture groups:
/// 1. everything before the marker (greedy, at least one char)
/// 2. the marker group: `q=cache:`, optional scheme, cached host and its `/`
/// 3. the optional `http://` / `https://` scheme
/// 4. the cached host (lazy, up to the first `/` that lets the rest match)
/// 5. the original path, query and fragment (lazy)
/// 6. the trailing suffix: `&...`, end of input, `+&...` or a bare `+`
///
/// The suffix alternation order is load-bearing. With leftmost-first
/// semantics, group 5 stops at the first `&`, at the end of input, or at the
/// first `+`, whichever the alternation reaches first while group 5 grows.
/// A bare `+` ends the match there; anything after it is outside the match.
pub static WEBCACHE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+)(q=cache:(https?://)?(.+?)/)(.*?)(&.+|$|\+&.+|\+)")
        .expect("WEBCACHE_URL regex")
});

/// Host substring that identifies the cache viewer.
pub const WEBCACHE_HOST_TOKEN: &str = "webcache";

/// Escapes decoded before extraction, in order.
pub const DECODED_ESCAPES: [(&str, &str); 2] = [("%3A", ":"), ("%2F", "/")];
