use crate::character_sets::is_host_delimiter;

/// Literal separating the scheme from the rest of the URL
pub const SCHEME_DELIMITER: &[u8] = b"://";

/// Find the first "://" in the input.
/// Returns the byte offset of the ':' or None.
pub fn find_scheme_delimiter(input: &[u8]) -> Option<usize> {
    memchr::memmem::find(input, SCHEME_DELIMITER)
}

/// Scan forward from `pos` until ':', '/', '?', '#' or end of input
pub fn find_host_end(input: &[u8], pos: usize) -> usize {
    input[pos..]
        .iter()
        .position(|&b| is_host_delimiter(b))
        .map_or(input.len(), |offset| pos + offset)
}

/// Scan forward from `pos` until '/', '?', '#' or end of input
pub fn find_port_end(input: &[u8], pos: usize) -> usize {
    memchr::memchr3(b'/', b'?', b'#', &input[pos..]).map_or(input.len(), |offset| pos + offset)
}

/// Scan forward from `pos` until '?', '#' or end of input
pub fn find_path_end(input: &[u8], pos: usize) -> usize {
    memchr::memchr2(b'?', b'#', &input[pos..]).map_or(input.len(), |offset| pos + offset)
}

/// Scan forward from `pos` until '#' or end of input
pub fn find_query_end(input: &[u8], pos: usize) -> usize {
    memchr::memchr(b'#', &input[pos..]).map_or(input.len(), |offset| pos + offset)
}

/// Split a query segment at its first '='.
/// A segment without '=' is all key, with an empty value.
pub fn split_key_value(segment: &str) -> (&str, &str) {
    memchr::memchr(b'=', segment.as_bytes()).map_or((segment, ""), |pos| {
        (&segment[..pos], &segment[pos + 1..])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_scheme_delimiter() {
        assert_eq!(find_scheme_delimiter(b"http://example.com"), Some(4));
        assert_eq!(find_scheme_delimiter(b"://x"), Some(0));
        assert_eq!(find_scheme_delimiter(b"example.com"), None);
        assert_eq!(find_scheme_delimiter(b"a:/b"), None);
        // First occurrence wins
        assert_eq!(find_scheme_delimiter(b"a://b://c"), Some(1));
    }

    #[test]
    fn test_find_host_end() {
        assert_eq!(find_host_end(b"example.com:80/", 0), 11);
        assert_eq!(find_host_end(b"example.com/a", 0), 11);
        assert_eq!(find_host_end(b"example.com?q", 0), 11);
        assert_eq!(find_host_end(b"example.com#f", 0), 11);
        assert_eq!(find_host_end(b"example.com", 0), 11);
        assert_eq!(find_host_end(b"xx//h", 4), 5);
    }

    #[test]
    fn test_find_port_end() {
        // ':' does not end a port
        assert_eq!(find_port_end(b":80:81/x", 1), 6);
        assert_eq!(find_port_end(b":80?q", 1), 3);
        assert_eq!(find_port_end(b":80", 1), 3);
    }

    #[test]
    fn test_find_path_and_query_end() {
        assert_eq!(find_path_end(b"/a/b?q#f", 0), 4);
        assert_eq!(find_path_end(b"/a/b#f", 0), 4);
        assert_eq!(find_path_end(b"/a/b", 0), 4);
        // '?' inside the query is data
        assert_eq!(find_query_end(b"?a?b#f", 0), 4);
        assert_eq!(find_query_end(b"?a?b", 0), 4);
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(split_key_value("a=1"), ("a", "1"));
        assert_eq!(split_key_value("a="), ("a", ""));
        assert_eq!(split_key_value("a"), ("a", ""));
        assert_eq!(split_key_value("=1"), ("", "1"));
        assert_eq!(split_key_value("a=b=c"), ("a", "b=c"));
        assert_eq!(split_key_value(""), ("", ""));
    }
}
