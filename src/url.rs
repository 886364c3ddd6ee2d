use crate::compat::{String, ToString};
use crate::url_components::UrlComponents;
use core::fmt;

/// A URL split into its structural parts.
///
/// Every field is a plain string; a missing component is the empty string.
/// The path and query are kept exactly as they appeared in the input
/// (still percent-encoded). Use [`UrlComponents`] when "present but empty"
/// has to be told apart from "absent".
///
/// # Examples
///
/// ```
/// use urlsplit::Url;
///
/// let url = Url::parse("http://example.com:8080/a/b?x=1&y=2#frag");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host(), "example.com");
/// assert_eq!(url.port(), "8080");
/// assert_eq!(url.path(), "/a/b");
/// assert_eq!(url.raw_query(), "x=1&y=2");
/// assert_eq!(url.fragment(), "frag");
/// assert_eq!(url.to_string(), "http://example.com:8080/a/b?x=1&y=2#frag");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Url {
    scheme: String,
    host: String,
    port: String,
    path: String,
    raw_query: String,
    fragment: String,
}

impl Url {
    /// Parse a URL string. Never fails.
    pub fn parse(input: &str) -> Self {
        crate::parser::parse_url(input)
    }

    /// Build a `Url` by slicing `input` at the offsets recorded in `components`.
    pub fn from_components(input: &str, components: &UrlComponents) -> Self {
        let slice = |range: Option<core::ops::Range<usize>>| {
            range
                .and_then(|range| input.get(range))
                .unwrap_or_default()
                .to_string()
        };

        Self {
            scheme: slice(Some(components.scheme_range())),
            host: slice(Some(components.host_range())),
            port: slice(components.port_range()),
            path: slice(components.path_range()),
            raw_query: slice(components.query_range()),
            fragment: slice(components.fragment_range()),
        }
    }

    /// Get the scheme, without "://"
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port as written, without ':'. Not validated as numeric.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Get the raw (still percent-encoded) path, including its leading '/'
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the raw query string, without '?'
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Get the fragment, without '#'
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn has_scheme(&self) -> bool {
        !self.scheme.is_empty()
    }

    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    pub fn has_query(&self) -> bool {
        !self.raw_query.is_empty()
    }

    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    pub fn set_scheme(&mut self, scheme: &str) {
        self.scheme = scheme.to_string();
    }

    pub fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    pub fn set_port(&mut self, port: &str) {
        self.port = port.to_string();
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    pub fn set_raw_query(&mut self, raw_query: &str) {
        self.raw_query = raw_query.to_string();
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }

    /// Reassemble the URL (same as `to_string()`)
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_url(
            f,
            &self.scheme,
            &self.host,
            &self.port,
            &self.path,
            &self.raw_query,
            &self.fragment,
        )
    }
}

impl From<&str> for Url {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Serialize URL parts as scheme://host[:port]path[?query][#fragment].
///
/// Without a scheme the "://" is dropped, unless the remainder itself contains
/// "://" (a parse would otherwise read part of it as a scheme).
pub(crate) fn write_url(
    f: &mut fmt::Formatter<'_>,
    scheme: &str,
    host: &str,
    port: &str,
    path: &str,
    query: &str,
    fragment: &str,
) -> fmt::Result {
    let needs_scheme_delimiter = !scheme.is_empty()
        || [host, port, path, query, fragment]
            .iter()
            .any(|part| part.contains("://"))
        || (port.ends_with(':') && path.starts_with("//"));

    if needs_scheme_delimiter {
        f.write_str(scheme)?;
        f.write_str("://")?;
    }
    f.write_str(host)?;
    if !port.is_empty() {
        f.write_str(":")?;
        f.write_str(port)?;
    }
    f.write_str(path)?;
    if !query.is_empty() {
        f.write_str("?")?;
        f.write_str(query)?;
    }
    if !fragment.is_empty() {
        f.write_str("#")?;
        f.write_str(fragment)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_full() {
        let url = Url::parse("http://example.com:8080/a/b?x=1&y=2#frag");
        assert_eq!(url.to_string(), "http://example.com:8080/a/b?x=1&y=2#frag");
        assert_eq!(url.href(), url.to_string());
    }

    #[test]
    fn test_display_without_scheme() {
        let url = Url::parse("example.com/a?b");
        assert_eq!(url.to_string(), "example.com/a?b");
    }

    #[test]
    fn test_display_drops_empty_delimiters() {
        // An empty port, query and fragment all flatten to ""
        let url = Url::parse("http://h:/p?#");
        assert_eq!(url.to_string(), "http://h/p");
    }

    #[test]
    fn test_display_keeps_scheme_delimiter_when_needed() {
        let url = Url::parse("://a//b");
        assert_eq!(url.scheme(), "");
        assert_eq!(url.to_string(), "a//b");

        let url = Url::parse("://a:1//b://c");
        assert_eq!(url.scheme(), "");
        assert_eq!(url.to_string(), "://a:1//b://c");

        // A port ending in ':' followed by "//" would form "://"
        let url = Url::parse("://h:1://b");
        assert_eq!(url.port(), "1:");
        assert_eq!(url.path(), "//b");
        assert_eq!(url.to_string(), "://h:1://b");
    }

    #[test]
    fn test_setters() {
        let mut url = Url::parse("http://example.com/a?x=1");
        url.set_scheme("https");
        url.set_port("8443");
        url.set_path("/b");
        url.set_raw_query("y=2");
        url.set_fragment("top");
        url.set_host("example.org");
        assert_eq!(url.to_string(), "https://example.org:8443/b?y=2#top");
    }

    #[test]
    fn test_has_checks() {
        let url = Url::parse("http://h");
        assert!(url.has_scheme());
        assert!(!url.has_port());
        assert!(!url.has_query());
        assert!(!url.has_fragment());
        assert!(!Url::parse("h").has_scheme());
    }

    #[test]
    fn test_public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Url>();
        assert_send_sync::<UrlComponents>();
        assert_send_sync::<crate::QueryPairs>();
        assert_send_sync::<crate::ParsedUrl>();
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Url::default().to_string(), "");
        assert_eq!(Url::parse(""), Url::default());
    }
}
