//! Giphy search capability.
//!
//! The plugin never performs network I/O itself: it asks the Zellij host to make
//! the request and receives the response as an event. This module covers both
//! ends of that exchange.
//!
//! - `request`: URL and context construction, request generations
//! - `response`: decoding bodies and HTTP failures into candidates or errors

pub mod request;
pub mod response;

pub use request::{parse_context, RequestId, SearchParams, SearchRequest, GIPHY_SEARCH_ENDPOINT};
pub use response::decode_response;
