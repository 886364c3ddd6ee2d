use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// Encode sets are expressed as "everything that is NOT safe".
// Based on RFC 3986 section 2.3 (unreserved characters)

/// Component percent-encode set
/// Escapes every byte except the unreserved set: A-Z a-z 0-9 - _ . ~
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path percent-encode set
/// Component set with the sub-delims and path separators kept: $ & + , / ; : = @
pub const PATH_SAFE_SET: &AsciiSet = &COMPONENT_SET
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b';')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Percent-encode a string using the provided encode set
pub fn percent_encode(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Decode a percent-encoded string.
///
/// Malformed escapes (`%` not followed by two hex digits) are kept verbatim and
/// byte sequences that are not UTF-8 become U+FFFD.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Decode a percent-encoded string, rejecting output that is not UTF-8.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPercentEncoding`] when the decoded bytes are
/// not valid UTF-8.
pub fn percent_decode_strict(input: &str) -> Result<String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ParseError::InvalidPercentEncoding)
}
