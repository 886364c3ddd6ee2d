mod state;

pub use state::State;

use crate::helpers::{
    SCHEME_DELIMITER, find_host_end, find_path_end, find_port_end, find_query_end,
    find_scheme_delimiter,
};
use crate::url::Url;
use crate::url_components::UrlComponents;

/// Trait for types that can be built from a URL or query string.
/// Parsing is permissive: every input maps to some value.
pub trait Parseable: Sized {
    fn parse(input: &str) -> Self;
}

/// Parse a string into any `Parseable` type
pub fn parse<T: Parseable>(input: &str) -> T {
    T::parse(input)
}

/// Split a URL into its component offsets.
///
/// Single left-to-right pass, no backtracking. Every state after `Host` is
/// only entered when the scanner stops on that state's introducing delimiter.
pub fn split_components(input: &str) -> UrlComponents {
    let bytes = input.as_bytes();
    let mut components = UrlComponents::new(bytes.len());
    let mut pos = 0;
    let mut state = State::Scheme;

    loop {
        match state {
            State::Scheme => {
                if let Some(delimiter) = find_scheme_delimiter(bytes) {
                    components.scheme_end = Some(delimiter);
                    pos = delimiter + SCHEME_DELIMITER.len();
                }
                state = State::Host;
            }
            State::Host => {
                components.host_start = pos;
                pos = find_host_end(bytes, pos);
                components.host_end = pos;
                state = State::from_delimiter(bytes.get(pos).copied());
            }
            State::Port => {
                components.port_start = Some(pos);
                pos = find_port_end(bytes, pos + 1);
                state = State::from_delimiter(bytes.get(pos).copied());
            }
            State::Path => {
                components.pathname_start = Some(pos);
                pos = find_path_end(bytes, pos);
                state = State::from_delimiter(bytes.get(pos).copied());
            }
            State::Query => {
                components.search_start = Some(pos);
                pos = find_query_end(bytes, pos + 1);
                state = State::from_delimiter(bytes.get(pos).copied());
            }
            State::Fragment => {
                components.hash_start = Some(pos);
                state = State::Done;
            }
            State::Done => break,
        }
    }

    tracing::trace!(
        len = input.len(),
        has_scheme = components.has_scheme(),
        has_port = components.has_port(),
        has_query = components.has_query(),
        has_fragment = components.has_fragment(),
        "split url components"
    );

    components
}

/// Parse a URL string into its structural parts.
/// Never fails; missing components come back as empty strings.
pub fn parse_url(input: &str) -> Url {
    Url::from_components(input, &split_components(input))
}

impl Parseable for Url {
    fn parse(input: &str) -> Self {
        parse_url(input)
    }
}

impl Parseable for UrlComponents {
    fn parse(input: &str) -> Self {
        split_components(input)
    }
}
