//! History-strategy collaborator and the stock router normalization.
//!
//! The navigators in this crate compute URLs; a [`HistoryStrategy`] is what
//! actually records them. [`MemoryHistory`] is an in-process implementation
//! for hosts without a browser history.

/// The component that owns and mutates navigation history.
///
/// The navigators always pass `None` as `state` and an empty `title`.
pub trait HistoryStrategy {
    /// Pushes a new history entry.
    fn push_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str);

    /// Replaces the current history entry in place.
    fn replace_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str);

    /// Router-level URL normalization.
    ///
    /// The default is [`normalize_url`] without a base href.
    fn normalize_default(&self, url: &str) -> String {
        normalize_url(url, "")
    }
}

impl<H: HistoryStrategy + ?Sized> HistoryStrategy for &mut H {
    fn push_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        (**self).push_state(state, title, url, query);
    }

    fn replace_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        (**self).replace_state(state, title, url, query);
    }

    fn normalize_default(&self, url: &str) -> String {
        (**self).normalize_default(url)
    }
}

impl<H: HistoryStrategy + ?Sized> HistoryStrategy for Box<H> {
    fn push_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        (**self).push_state(state, title, url, query);
    }

    fn replace_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        (**self).replace_state(state, title, url, query);
    }

    fn normalize_default(&self, url: &str) -> String {
        (**self).normalize_default(url)
    }
}

/// Stock router normalization.
///
/// Drops a trailing `/index.html`, strips `base_href` when it prefixes the
/// URL, then drops one trailing `/` from the path portion.
///
/// # Example
///
/// ```rust
/// use webcache_location::normalize_url;
///
/// assert_eq!(normalize_url("/", ""), "");
/// assert_eq!(normalize_url("/app/courses/?x=1", "/app"), "/courses?x=1");
/// assert_eq!(normalize_url("/docs/index.html", ""), "/docs");
/// ```
#[must_use]
pub fn normalize_url(url: &str, base_href: &str) -> String {
    let url = url.strip_suffix("/index.html").unwrap_or(url);
    let url = if base_href.is_empty() {
        url
    } else {
        url.strip_prefix(base_href).unwrap_or(url)
    };
    strip_trailing_slash(url)
}

/// Drops one `/` right before the first `?` or `#`, or at the end.
///
/// A URL that starts with `?` or `#` is treated as all path.
#[must_use]
pub fn strip_trailing_slash(url: &str) -> String {
    let path_end = match url.find(['#', '?']) {
        Some(0) | None => url.len(),
        Some(i) => i,
    };
    let (path, rest) = url.split_at(path_end);
    let path = path.strip_suffix('/').unwrap_or(path);

    let mut out = String::with_capacity(url.len());
    out.push_str(path);
    out.push_str(rest);
    out
}

/// One recorded history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: Option<String>,
    pub title: String,
    pub url: String,
    pub query: String,
}

impl HistoryEntry {
    /// URL with the query appended, adding `?` when the query lacks one.
    #[must_use]
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        if self.query.starts_with('?') {
            format!("{}{}", self.url, self.query)
        } else {
            format!("{}?{}", self.url, self.query)
        }
    }
}

/// In-memory history: an entry stack with a cursor.
///
/// Pushing discards any entries ahead of the cursor, like a browser does
/// after navigating back.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    base_href: String,
}

impl MemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_href(base_href: impl Into<String>) -> Self {
        Self {
            base_href: base_href.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_options(options: &crate::Options) -> Self {
        Self::with_base_href(options.base_href.clone())
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves the cursor one entry back. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves the cursor one entry forward. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }
}

fn entry(state: Option<&str>, title: &str, url: &str, query: &str) -> HistoryEntry {
    HistoryEntry {
        state: state.map(str::to_string),
        title: title.to_string(),
        url: url.to_string(),
        query: query.to_string(),
    }
}

impl HistoryStrategy for MemoryHistory {
    fn push_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(entry(state, title, url, query));
        self.cursor = Some(self.entries.len() - 1);
    }

    fn replace_state(&mut self, state: Option<&str>, title: &str, url: &str, query: &str) {
        match self.cursor.and_then(|i| self.entries.get_mut(i)) {
            Some(current) => *current = entry(state, title, url, query),
            None => self.push_state(state, title, url, query),
        }
    }

    fn normalize_default(&self, url: &str) -> String {
        normalize_url(url, &self.base_href)
    }
}
