use crate::compat::{String, ToString, Vec};
use crate::error::Result;
use crate::helpers::split_key_value;
use crate::parser::Parseable;
use crate::unicode::percent_encode::{
    COMPONENT_SET, percent_decode, percent_decode_strict, percent_encode_into,
};

/// Iterator over the raw (still encoded) key/value pairs of a query string.
///
/// Each step takes the text up to the next '&' (or end) and splits it at its
/// first '='. An empty segment between two '&' yields `("", "")`; a trailing
/// '&' yields nothing.
struct RawPairs<'a> {
    query: &'a str,
    start: usize,
}

impl<'a> RawPairs<'a> {
    fn new(query: &'a str) -> Self {
        Self { query, start: 0 }
    }
}

impl<'a> Iterator for RawPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.query.len() {
            return None;
        }

        let rest = &self.query[self.start..];
        let segment = match memchr::memchr(b'&', rest.as_bytes()) {
            Some(amp) => {
                self.start += amp + 1;
                &rest[..amp]
            }
            None => {
                self.start = self.query.len();
                rest
            }
        };

        Some(split_key_value(segment))
    }
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

/// Decode a query string into ordered key/value pairs.
///
/// A single leading `?` is ignored. Keys and values are percent-decoded
/// independently; duplicates and order are preserved.
///
/// # Examples
///
/// ```
/// use urlsplit::decode_query;
///
/// let pairs = decode_query("?a=1&&b=%20");
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(pairs[0], ("a".to_string(), "1".to_string()));
/// assert_eq!(pairs[1], (String::new(), String::new()));
/// assert_eq!(pairs[2], ("b".to_string(), " ".to_string()));
/// ```
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    let query = strip_question_mark(query);
    let pairs: Vec<(String, String)> = RawPairs::new(query)
        .map(|(key, value)| (percent_decode(key), percent_decode(value)))
        .collect();

    tracing::trace!(len = query.len(), pairs = pairs.len(), "decoded query string");
    pairs
}

/// Decode a query string, rejecting escapes that do not decode to UTF-8.
///
/// # Errors
///
/// Returns [`crate::ParseError::InvalidPercentEncoding`] for the first key or
/// value whose decoded bytes are not valid UTF-8.
pub fn try_decode_query(query: &str) -> Result<Vec<(String, String)>> {
    RawPairs::new(strip_question_mark(query))
        .map(|(key, value)| -> Result<(String, String)> {
            Ok((percent_decode_strict(key)?, percent_decode_strict(value)?))
        })
        .collect()
}

/// Encode ordered key/value pairs into a query string (no leading `?`).
///
/// Keys and values are percent-encoded with [`COMPONENT_SET`]; an empty
/// slice gives an empty string.
///
/// # Examples
///
/// ```
/// use urlsplit::encode_query;
///
/// assert_eq!(encode_query(&[("q", "a b"), ("lang", "en")]), "q=a%20b&lang=en");
/// ```
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    let mut result = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            result.push('&');
        }
        percent_encode_into(&mut result, key.as_ref(), COMPONENT_SET);
        result.push('=');
        percent_encode_into(&mut result, value.as_ref(), COMPONENT_SET);
    }

    tracing::trace!(pairs = pairs.len(), len = result.len(), "encoded query string");
    result
}

/// Ordered, decoded query-string pairs.
/// Keeps duplicates and first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryPairs {
    params: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        Self {
            params: decode_query(query),
        }
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Delete every pair with the given key.
    pub fn delete(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// Set a key to a single value.
    /// The first pair with that key keeps its position; later ones are dropped.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found_first = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            *v = value.to_string();
            true
        });
        if !found_first {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.params
    }

    /// Encode to a query string without leading `?`, or "" if there are no pairs.
    pub fn serialize(&self) -> String {
        encode_query(&self.params)
    }
}

impl core::fmt::Display for QueryPairs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl Parseable for QueryPairs {
    fn parse(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<&str> for QueryPairs {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Vec<(String, String)>> for QueryPairs {
    fn from(params: Vec<(String, String)>) -> Self {
        Self { params }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for QueryPairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        }
    }
}

impl IntoIterator for QueryPairs {
    type Item = (String, String);
    type IntoIter = <Vec<(String, String)> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}
