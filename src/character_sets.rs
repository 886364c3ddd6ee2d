/// Delimiter flags for the URL scanner.
/// Each bit marks a byte that ends one component.
pub const ENDS_HOST: u8 = 1;
pub const ENDS_PORT: u8 = 1 << 1;
pub const ENDS_PATH: u8 = 1 << 2;
pub const ENDS_QUERY: u8 = 1 << 3;

/// Delimiter classification table
/// `:` ends only the host, `/` ends host and port, `?` ends everything but
/// the query, `#` ends everything.
const DELIMITER_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    table[b':' as usize] = ENDS_HOST;
    table[b'/' as usize] = ENDS_HOST | ENDS_PORT;
    table[b'?' as usize] = ENDS_HOST | ENDS_PORT | ENDS_PATH;
    table[b'#' as usize] = ENDS_HOST | ENDS_PORT | ENDS_PATH | ENDS_QUERY;

    table
};

/// Classify a byte for delimiter scanning (direct lookup, no range check)
pub fn classify_delimiter_byte(b: u8) -> u8 {
    DELIMITER_TABLE[b as usize]
}

/// Check if a byte ends the host component
pub fn is_host_delimiter(b: u8) -> bool {
    classify_delimiter_byte(b) & ENDS_HOST != 0
}
