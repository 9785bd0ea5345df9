//! Search response decoding.
//!
//! Turns the raw `(status, body)` pair from a `WebRequestResult` event into the
//! candidate list, or into the error that explains why there is none.

use crate::domain::{Gif, JiffyError, Result};
use serde::Deserialize;

/// Successful search payload. Pagination is ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Gif>,
}

/// Shape of Giphy error bodies. Older endpoints use `meta.msg`, the gateway
/// uses a top-level `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    #[serde(default)]
    msg: Option<String>,
}

/// Decodes a search response.
///
/// An empty candidate list is returned as `Ok(vec![])`; deciding that this is a
/// "nothing found" failure is the state machine's job.
///
/// # Errors
///
/// - [`JiffyError::Http`] for any status outside `200..=299`
/// - [`JiffyError::Decode`] if a success body is not a search payload
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<Gif>> {
    if !(200..=299).contains(&status) {
        return Err(http_failure(status, body));
    }

    let response: SearchResponse = serde_json::from_slice(body)?;
    tracing::debug!(candidates = response.data.len(), "search response decoded");
    Ok(response.data)
}

fn http_failure(status: u16, body: &[u8]) -> JiffyError {
    let explained = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.meta.and_then(|m| m.msg).or(b.message))
        .filter(|m| !m.trim().is_empty());

    match explained {
        Some(message) => JiffyError::Http { status, message },
        None => JiffyError::http(status, body),
    }
}
