use crate::compat::{String, ToString};
use crate::parser::{Parseable, parse_url};
use crate::query_pairs::QueryPairs;
use crate::unicode::percent_encode::{PATH_SAFE_SET, percent_decode, percent_encode};
use crate::url::{Url, write_url};
use core::fmt;

/// A path split into its decoded form and, when needed, its original bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    /// Percent-decoded path
    pub path: String,
    /// Original path, kept only when re-encoding it would not reproduce it
    pub raw_path: Option<String>,
}

/// Decode a raw path and decide whether its original bytes must be kept.
///
/// An empty path is treated as "/". If encoding the raw path with
/// [`PATH_SAFE_SET`] gives back the same string, the decoded path is enough
/// to rebuild it and `raw_path` is `None`.
///
/// # Examples
///
/// ```
/// use urlsplit::normalize_path;
///
/// let plain = normalize_path("/a/b;c=d");
/// assert_eq!(plain.path, "/a/b;c=d");
/// assert_eq!(plain.raw_path, None);
///
/// let escaped = normalize_path("/a%20b");
/// assert_eq!(escaped.path, "/a b");
/// assert_eq!(escaped.raw_path.as_deref(), Some("/a%20b"));
/// ```
pub fn normalize_path(raw_path: &str) -> NormalizedPath {
    let raw_path = if raw_path.is_empty() { "/" } else { raw_path };
    let path = percent_decode(raw_path);
    let canonical = percent_encode(raw_path, PATH_SAFE_SET) == raw_path;

    NormalizedPath {
        path,
        raw_path: (!canonical).then(|| raw_path.to_string()),
    }
}

/// Caller-facing view of a URL: decoded path and query pairs, plus the
/// re-encoded query string.
///
/// # Examples
///
/// ```
/// use urlsplit::ParsedUrl;
///
/// let parsed = ParsedUrl::parse("https://example.com/docs%20v2?q=a%20b&&x");
/// assert_eq!(parsed.path(), "/docs v2");
/// assert_eq!(parsed.raw_path(), Some("/docs%20v2"));
/// assert_eq!(parsed.query().get("q"), Some("a b"));
/// assert_eq!(parsed.raw_query(), "q=a%20b&=&x=");
/// assert!(!parsed.is_query_canonical());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedUrl {
    scheme: String,
    host: String,
    port: String,
    path: String,
    raw_path: Option<String>,
    query: QueryPairs,
    raw_query: String,
    query_canonical: bool,
    fragment: String,
}

impl ParsedUrl {
    /// Split, decode and re-encode a URL string. Never fails.
    pub fn parse(input: &str) -> Self {
        Self::from_url(&parse_url(input))
    }

    /// Build the caller-facing view from an already split URL.
    pub fn from_url(url: &Url) -> Self {
        let NormalizedPath { path, raw_path } = normalize_path(url.path());
        let query = QueryPairs::parse(url.raw_query());
        let raw_query = query.serialize();
        let query_canonical = raw_query == url.raw_query();

        tracing::trace!(
            pairs = query.len(),
            raw_path_kept = raw_path.is_some(),
            query_canonical,
            "normalized url"
        );

        Self {
            scheme: url.scheme().to_string(),
            host: url.host().to_string(),
            port: url.port().to_string(),
            path,
            raw_path,
            query,
            raw_query,
            query_canonical,
            fragment: url.fragment().to_string(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Get the decoded path ("/" when the URL had none)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the original path when it was not in canonical encoded form
    pub fn raw_path(&self) -> Option<&str> {
        self.raw_path.as_deref()
    }

    /// Get the path as it should be written back into a URL
    pub fn escaped_path(&self) -> &str {
        self.raw_path.as_deref().unwrap_or(&self.path)
    }

    pub fn query(&self) -> &QueryPairs {
        &self.query
    }

    /// Get the re-encoded query string, without '?'
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Whether re-encoding the decoded pairs reproduced the original query
    pub fn is_query_canonical(&self) -> bool {
        self.query_canonical
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Convert back into a plain `Url` with the escaped path and re-encoded query
    pub fn to_url(&self) -> Url {
        let mut url = Url::default();
        url.set_scheme(&self.scheme);
        url.set_host(&self.host);
        url.set_port(&self.port);
        url.set_path(self.escaped_path());
        url.set_raw_query(&self.raw_query);
        url.set_fragment(&self.fragment);
        url
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_url(
            f,
            &self.scheme,
            &self.host,
            &self.port,
            self.escaped_path(),
            &self.raw_query,
            &self.fragment,
        )
    }
}

impl Parseable for ParsedUrl {
    fn parse(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<&Url> for ParsedUrl {
    fn from(url: &Url) -> Self {
        Self::from_url(url)
    }
}
