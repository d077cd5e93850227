//! HTTP helper for fetching records from the configured endpoint.
//!
//! Client-side (hydrate): a real GET via `gloo-net`. Server-side (SSR): a
//! stub error, since the grid only fetches in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `FetchError` values instead of panics so a bad
//! endpoint degrades to the error banner without breaking hydration. A
//! single attempt per call; retry is the user's decision.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Row;

/// Why a fetch produced no rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure or non-2xx status.
    Transport(String),
    /// Body was not the expected `{ "data": [...] }` envelope.
    Malformed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "fetch failed: {message}"),
            Self::Malformed(message) => write!(f, "unexpected response shape: {message}"),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pull the row array out of the one-level `{ "data": [...] }` envelope.
/// Array elements that are not objects are skipped rather than failing the
/// whole fetch.
#[cfg(any(test, feature = "hydrate"))]
fn extract_rows(body: &serde_json::Value) -> Result<Vec<Row>, FetchError> {
    let Some(data) = body.get("data") else {
        return Err(FetchError::Malformed("missing \"data\" field".to_owned()));
    };
    let Some(items) = data.as_array() else {
        return Err(FetchError::Malformed("\"data\" is not an array".to_owned()));
    };
    Ok(items.iter().filter_map(|item| item.as_object().cloned()).collect())
}

/// GET `url` and decode the record envelope.
///
/// # Errors
///
/// Returns `FetchError::Transport` on network failure or a non-2xx status,
/// and `FetchError::Malformed` when the body is not the expected envelope.
pub async fn fetch_records(url: &str) -> Result<Vec<Row>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Transport(status_failed_message(resp.status())));
        }
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        extract_rows(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}
