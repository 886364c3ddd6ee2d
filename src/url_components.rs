use core::ops::Range;

/// URL component offsets recorded by the scanner
/// Tracks where each component starts and ends in the original input
///
/// Input: "<https://example.com:8080/path?query#hash>"
/// - `scheme_end`: Some(5) (offset of "://")
/// - `host_start`: 8 (start of "example.com")
/// - `host_end`: 19 (end of "example.com", at ":")
/// - `port_start`: Some(19) (offset of ":")
/// - `pathname_start`: Some(24) (offset of "/path")
/// - `search_start`: Some(29) (offset of "?query")
/// - `hash_start`: Some(35) (offset of "#hash")
/// - `input_len`: 40
///
/// Each `Option` records whether the introducing delimiter was present, so
/// "present but empty" (`http://h?`) and "absent" (`http://h`) stay
/// distinguishable even though `Url` flattens both to "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UrlComponents {
    pub scheme_end: Option<usize>,
    pub host_start: usize,
    pub host_end: usize,
    pub port_start: Option<usize>,
    pub pathname_start: Option<usize>,
    pub search_start: Option<usize>,
    pub hash_start: Option<usize>,
    pub input_len: usize,
}

impl UrlComponents {
    /// Create a new `UrlComponents` for an input of `input_len` bytes
    pub fn new(input_len: usize) -> Self {
        Self {
            input_len,
            ..Self::default()
        }
    }

    pub fn has_scheme(&self) -> bool {
        self.scheme_end.is_some()
    }

    pub fn has_port(&self) -> bool {
        self.port_start.is_some()
    }

    pub fn has_path(&self) -> bool {
        self.pathname_start.is_some()
    }

    pub fn has_query(&self) -> bool {
        self.search_start.is_some()
    }

    pub fn has_fragment(&self) -> bool {
        self.hash_start.is_some()
    }

    /// Range of the scheme (empty at 0 if absent)
    pub fn scheme_range(&self) -> Range<usize> {
        0..self.scheme_end.unwrap_or(0)
    }

    pub fn host_range(&self) -> Range<usize> {
        self.host_start..self.host_end
    }

    /// Range of the port digits, after the ':'
    pub fn port_range(&self) -> Option<Range<usize>> {
        self.port_start.map(|start| {
            start + 1..self.first_start([self.pathname_start, self.search_start, self.hash_start])
        })
    }

    /// Range of the path, including its leading '/'
    pub fn path_range(&self) -> Option<Range<usize>> {
        self.pathname_start
            .map(|start| start..self.first_start([self.search_start, self.hash_start, None]))
    }

    /// Range of the query, after the '?'
    pub fn query_range(&self) -> Option<Range<usize>> {
        self.search_start
            .map(|start| start + 1..self.first_start([self.hash_start, None, None]))
    }

    /// Range of the fragment, after the '#'
    pub fn fragment_range(&self) -> Option<Range<usize>> {
        self.hash_start.map(|start| start + 1..self.input_len)
    }

    /// Offset of the first present delimiter, or end of input
    fn first_start(&self, candidates: [Option<usize>; 3]) -> usize {
        candidates
            .into_iter()
            .flatten()
            .next()
            .unwrap_or(self.input_len)
    }
}
