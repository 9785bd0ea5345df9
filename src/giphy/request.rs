//! Search request construction.
//!
//! A [`SearchRequest`] is everything the plugin shim needs to hand a search to
//! Zellij's `web_request`: the URL and a context map. The context map comes back
//! untouched on the matching `WebRequestResult` event, which is how a response
//! is paired with the request that produced it.

use crate::domain::{JiffyError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Default Giphy search endpoint.
pub const GIPHY_SEARCH_ENDPOINT: &str = "https://api.giphy.com/v1/gifs/search";

/// Context key carrying the request generation.
const CONTEXT_REQUEST_ID: &str = "jiffy_request";

/// Context key carrying the searched term.
const CONTEXT_TERM: &str = "jiffy_term";

/// Monotonic generation number identifying one issued search.
///
/// Only the response whose id matches the in-flight search may change state;
/// anything older is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The first id handed out in a session.
    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed query parameters sent with every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Base URL of the search endpoint.
    pub endpoint: String,
    /// Giphy API key. Searches fail with [`JiffyError::MissingApiKey`] without one.
    pub api_key: Option<String>,
    /// Number of candidates requested per search.
    pub limit: u32,
    /// Pagination offset. Always the first page.
    pub offset: u32,
    /// Content rating (`g` is general audiences).
    pub rating: String,
    /// Language code for the query.
    pub lang: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            endpoint: GIPHY_SEARCH_ENDPOINT.to_string(),
            api_key: None,
            limit: 25,
            offset: 0,
            rating: "g".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// One search, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: RequestId,
    pub term: String,
    pub params: SearchParams,
}

impl SearchRequest {
    #[must_use]
    pub fn new(id: RequestId, term: impl Into<String>, params: SearchParams) -> Self {
        Self {
            id,
            term: term.into(),
            params,
        }
    }

    /// Builds the full GET URL with every query component percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`JiffyError::MissingApiKey`] if no key is configured.
    pub fn url(&self) -> Result<String> {
        let api_key = self
            .params
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(JiffyError::MissingApiKey)?;

        Ok(format!(
            "{}?api_key={}&q={}&limit={}&offset={}&rating={}&lang={}",
            self.params.endpoint,
            encode_component(api_key),
            encode_component(&self.term),
            self.params.limit,
            self.params.offset,
            encode_component(&self.params.rating),
            encode_component(&self.params.lang),
        ))
    }

    /// Context map attached to the web request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_REQUEST_ID.to_string(), self.id.0.to_string());
        context.insert(CONTEXT_TERM.to_string(), self.term.clone());
        context
    }
}

/// Recovers the request id and term from a web request context map.
///
/// Returns `None` for responses to requests this plugin did not tag.
#[must_use]
pub fn parse_context(context: &BTreeMap<String, String>) -> Option<(RequestId, String)> {
    let id = context.get(CONTEXT_REQUEST_ID)?.parse::<u64>().ok()?;
    let term = context.get(CONTEXT_TERM).cloned().unwrap_or_default();
    Some((RequestId(id), term))
}

/// Percent-encodes a query component (RFC 3986 unreserved characters pass through).
fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
