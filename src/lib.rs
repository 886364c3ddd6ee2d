#![cfg_attr(not(feature = "std"), no_std)]

//! Permissive URL splitting with an order-preserving query-string codec.
//!
//! ```
//! use urlsplit::{decode_query, parse_url};
//!
//! let url = parse_url("http://example.com:8080/a/b?x=1&y=2#frag");
//! assert_eq!(url.host(), "example.com");
//! assert_eq!(url.port(), "8080");
//! assert_eq!(
//!     decode_query(url.raw_query()),
//!     vec![("x".to_string(), "1".to_string()), ("y".to_string(), "2".to_string())]
//! );
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod helpers;
mod normalize;
mod parser;
mod query_pairs;
mod unicode;
mod url;
mod url_components;

// Public API
pub use error::ParseError;
pub use normalize::{NormalizedPath, ParsedUrl, normalize_path};
pub use parser::{Parseable, parse, parse_url, split_components};
pub use query_pairs::{QueryPairs, decode_query, encode_query, try_decode_query};
pub use crate::url::Url;
pub use url_components::UrlComponents;

/// Percent-encoding primitives used by the query codec and path normalization.
pub mod percent {
    pub use crate::unicode::percent_encode::{
        COMPONENT_SET, PATH_SAFE_SET, percent_decode, percent_decode_strict, percent_encode,
    };
}

pub type Result<T> = core::result::Result<T, ParseError>;
