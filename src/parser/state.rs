/// URL scanner states
/// Visited strictly in declaration order, each at most once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Look for the "://" scheme delimiter
    Scheme,
    /// Host state (always entered)
    Host,
    /// Port state, entered on ':'
    Port,
    /// Path state, entered on '/'
    Path,
    /// Query state, entered on '?'
    Query,
    /// Fragment state, entered on '#'
    Fragment,
    /// End of input
    Done,
}

impl State {
    /// Pick the state introduced by the delimiter the scanner stopped on.
    /// Scanners only stop on delimiters of later states, so the order holds.
    pub fn from_delimiter(byte: Option<u8>) -> Self {
        match byte {
            Some(b':') => Self::Port,
            Some(b'/') => Self::Path,
            Some(b'?') => Self::Query,
            Some(b'#') => Self::Fragment,
            _ => Self::Done,
        }
    }
}
