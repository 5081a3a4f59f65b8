//! Cache-wrapped URL parsing, path extraction and rewriting.
//!
//! A wrapped URL looks like
//! `<prefix>q=cache:[<scheme>://]<cached-host>/<original-path><suffix>`.
//! Both directions go through a single match of [`WEBCACHE_URL`]: extraction
//! keeps only the original path, rewriting swaps it for a new one and keeps
//! everything else.

use crate::error::{Error, Result};
use crate::patterns::{DECODED_ESCAPES, WEBCACHE_HOST_TOKEN, WEBCACHE_URL};

/// Borrowed view over the parts of a cache-wrapped URL.
///
/// `before` and `after` hold any input outside the matched span. They are
/// usually empty, but a newline ahead of the marker or text following a bare
/// `+` suffix ends up there, and both transformations keep it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappedUrl<'a> {
    input: &'a str,
    before: &'a str,
    prefix: &'a str,
    marker: &'a str,
    scheme: Option<&'a str>,
    cached_host: &'a str,
    original_path: &'a str,
    suffix: &'a str,
    after: &'a str,
}

impl<'a> WrappedUrl<'a> {
    /// Parses `url` as a wrapped URL, or returns `None` when the wrapping
    /// structure is absent.
    ///
    /// No percent-decoding happens here.
    #[must_use]
    pub fn parse(url: &'a str) -> Option<Self> {
        let caps = WEBCACHE_URL.captures(url)?;
        let whole = caps.get(0)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Some(Self {
            input: url,
            before: &url[..whole.start()],
            prefix: group(1),
            marker: group(2),
            scheme: caps.get(3).map(|m| m.as_str()),
            cached_host: group(4),
            original_path: group(5),
            suffix: group(6),
            after: &url[whole.end()..],
        })
    }

    /// Like [`WrappedUrl::parse`], but reports a missing wrapping structure
    /// as [`Error::NotWrapped`].
    pub fn parse_strict(url: &'a str) -> Result<Self> {
        Self::parse(url).ok_or_else(|| Error::NotWrapped {
            url: url.to_string(),
        })
    }

    /// The full input this view was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.input
    }

    /// Everything ahead of the `q=cache:` marker within the match.
    #[must_use]
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// `q=cache:`, the optional scheme, the cached host and its trailing `/`.
    #[must_use]
    pub fn marker(&self) -> &'a str {
        self.marker
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&'a str> {
        self.scheme
    }

    #[must_use]
    pub fn cached_host(&self) -> &'a str {
        self.cached_host
    }

    /// Path, query and fragment of the original page, without the leading `/`.
    #[must_use]
    pub fn original_path(&self) -> &'a str {
        self.original_path
    }

    /// The proxy's trailing suffix: empty, `&...`, `+&...` or `+`.
    #[must_use]
    pub fn suffix(&self) -> &'a str {
        self.suffix
    }

    /// Input text outside the matched span, as `(before, after)`.
    #[must_use]
    pub fn unmatched(&self) -> (&'a str, &'a str) {
        (self.before, self.after)
    }

    /// The original path with a leading `/`, surrounded by any unmatched text.
    #[must_use]
    pub fn extracted_path(&self) -> String {
        let mut out = String::with_capacity(
            self.before.len() + 1 + self.original_path.len() + self.after.len(),
        );
        out.push_str(self.before);
        out.push('/');
        out.push_str(self.original_path);
        out.push_str(self.after);
        out
    }

    /// Rebuilds the URL with the original path replaced by `new_path`.
    ///
    /// One leading `/` is stripped from `new_path`. The path is inserted
    /// literally.
    #[must_use]
    pub fn with_path(&self, new_path: &str) -> String {
        let new_path = strip_leading_slash(new_path);
        let mut out = String::with_capacity(self.input.len() + new_path.len());
        out.push_str(self.before);
        out.push_str(self.prefix);
        out.push_str(self.marker);
        out.push_str(new_path);
        out.push_str(self.suffix);
        out.push_str(self.after);
        out
    }
}

/// Decodes `%3A` and `%2F`, and nothing else.
///
/// Matching is case-sensitive: `%3a` and `%2f` are left alone.
#[must_use]
pub fn decode_escapes(url: &str) -> String {
    DECODED_ESCAPES
        .iter()
        .fold(url.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Recovers the original page's path, query and fragment from a wrapped URL.
///
/// Input that is not a wrapped URL comes back with only the two escape
/// substitutions of [`decode_escapes`] applied.
///
/// # Example
///
/// ```rust
/// use webcache_location::extract_path;
///
/// let url = "http://webcache.example/search?q=cache:https://example.com/courses";
/// assert_eq!(extract_path(url), "/courses");
/// assert_eq!(extract_path("/plain/path"), "/plain/path");
/// ```
#[must_use]
pub fn extract_path(wrapped_url: &str) -> String {
    let decoded = decode_escapes(wrapped_url);
    match WrappedUrl::parse(&decoded) {
        Some(wrapped) => wrapped.extracted_path(),
        None => decoded,
    }
}

/// Builds a new wrapped URL by swapping the original path inside `current`.
///
/// When `current` is not a wrapped URL there is nothing to rewrite into, and
/// it is returned unchanged.
///
/// # Example
///
/// ```rust
/// use webcache_location::build_wrapped_url;
///
/// let current = "/search?q=cache:https://example.com/old&hl=en";
/// assert_eq!(
///     build_wrapped_url("/new", current),
///     "/search?q=cache:https://example.com/new&hl=en"
/// );
/// ```
#[must_use]
pub fn build_wrapped_url(new_path: &str, current: &str) -> String {
    match WrappedUrl::parse(current) {
        Some(wrapped) => wrapped.with_path(new_path),
        None => current.to_string(),
    }
}

/// Like [`build_wrapped_url`], but fails with [`Error::NotWrapped`] when
/// `current` has no wrapping structure.
pub fn try_build_wrapped_url(new_path: &str, current: &str) -> Result<String> {
    WrappedUrl::parse_strict(current).map(|wrapped| wrapped.with_path(new_path))
}

/// Extracts the original path only from URLs that mention the cache viewer.
///
/// Anything without the `webcache` token is returned as is, undecoded.
#[must_use]
pub fn resolve_cached_url(url: &str) -> String {
    if url.contains(WEBCACHE_HOST_TOKEN) {
        extract_path(url)
    } else {
        url.to_string()
    }
}

fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
