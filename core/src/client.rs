//! Request building, response parsing, and the dispatch cycle.
//!
//! # Design
//! `TableClient` carries no mutable state between calls; the only thing it
//! holds is a ureq `Agent` configured to hand back non-2xx responses as data.
//! The dispatch operation is split into `build_request` (pure, fails on bad
//! header text before any network activity) and `parse_response` (pure,
//! status check plus JSON decode plus normalization); `dispatch` wires the
//! two through the transport.

use serde_json::Value;
use ureq::Agent;

use crate::config::RequestConfig;
use crate::error::DispatchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::table::{normalize, TabularResult};
use crate::transport;

/// Stateless dispatcher for form-configured HTTP calls.
#[derive(Clone)]
pub struct TableClient {
    agent: Agent,
}

impl TableClient {
    pub fn new() -> Self {
        // Non-2xx statuses must come back as data so parse_response can turn
        // them into the exact "HTTP error! status" message.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Turn the form's fields into a concrete `HttpRequest`.
    ///
    /// Fails with `InvalidHeaders` before any network call when the header
    /// text is not a JSON object of strings. For non-GET methods the
    /// `Content-Type: application/json` header is forced, replacing any
    /// user-supplied value for that name.
    pub fn build_request(&self, config: &RequestConfig) -> Result<HttpRequest, DispatchError> {
        let mut headers = parse_headers(&config.headers_raw)?;

        if config.method != HttpMethod::Get {
            headers.retain(|(name, _)| !name.eq_ignore_ascii_case("content-type"));
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method: config.method,
            url: config.url.clone(),
            headers,
        })
    }

    /// Check the status range, decode the body as JSON, and normalize it.
    pub fn parse_response(&self, response: HttpResponse) -> Result<TabularResult, DispatchError> {
        if !(200..=299).contains(&response.status) {
            return Err(DispatchError::HttpStatus(response.status));
        }
        let value: Value = serde_json::from_str(&response.body)
            .map_err(|e| DispatchError::Decode(e.to_string()))?;
        Ok(normalize(&value))
    }

    /// Run the full cycle: build, execute over the network, parse.
    ///
    /// Blocks until the transport resolves or fails; no timeout, no retry.
    pub fn dispatch(&self, config: &RequestConfig) -> Result<TabularResult, DispatchError> {
        let request = self.build_request(config)?;
        let response = transport::execute(&self.agent, &request)?;
        self.parse_response(response)
    }
}

impl Default for TableClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the form's header text into name/value pairs.
///
/// Empty text means no extra headers. Anything that is not a JSON object
/// with string values is rejected.
fn parse_headers(raw: &str) -> Result<Vec<(String, String)>, DispatchError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| DispatchError::InvalidHeaders(e.to_string()))?;
    let map = value.as_object().ok_or_else(|| {
        DispatchError::InvalidHeaders("headers must be a JSON object".to_string())
    })?;

    let mut headers = Vec::with_capacity(map.len());
    for (name, cell) in map {
        let text = cell.as_str().ok_or_else(|| {
            DispatchError::InvalidHeaders(format!("header \"{name}\" must be a string"))
        })?;
        headers.push((name.clone(), text.to_string()));
    }
    Ok(headers)
}
