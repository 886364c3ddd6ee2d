/// Errors surfaced by the strict decoding helpers.
///
/// URL splitting and the lenient query codec never fail; only the `*_strict`
/// and `try_*` entry points report problems.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A percent-escape decoded to bytes that are not valid UTF-8
    InvalidPercentEncoding,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for strict decoding operations
pub type Result<T> = core::result::Result<T, ParseError>;
