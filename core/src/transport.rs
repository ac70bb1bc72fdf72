//! Executes an `HttpRequest` over the network with ureq.
//!
//! # Design
//! The agent is configured by `TableClient` with status-as-error disabled,
//! so 4xx/5xx responses arrive here as data and status interpretation stays
//! in `parse_response`. Everything that stops the exchange before a status
//! line exists — DNS, connection refused, an unusable header name — maps to
//! `DispatchError::Transport` with the underlying message passed through.
//! No timeout is configured; the call blocks until the transport resolves
//! or fails.

use ureq::Agent;

use crate::error::DispatchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Run `request` and return the raw status and body.
pub fn execute(agent: &Agent, request: &HttpRequest) -> Result<HttpResponse, DispatchError> {
    // No body is ever sent; POST and PUT go out with an empty payload.
    let result = match request.method {
        HttpMethod::Get => {
            let mut call = agent.get(&request.url);
            for (name, value) in &request.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.call()
        }
        HttpMethod::Delete => {
            let mut call = agent.delete(&request.url);
            for (name, value) in &request.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.call()
        }
        HttpMethod::Post => {
            let mut call = agent.post(&request.url);
            for (name, value) in &request.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.send_empty()
        }
        HttpMethod::Put => {
            let mut call = agent.put(&request.url);
            for (name, value) in &request.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.send_empty()
        }
    };

    let mut response = result.map_err(|e| DispatchError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| DispatchError::Transport(e.to_string()))?;

    Ok(HttpResponse { status, body })
}
