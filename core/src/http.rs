//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe one HTTP exchange as data. `TableClient::build_request`
//! produces an `HttpRequest` without touching the network; the `transport`
//! module executes it and hands back an `HttpResponse` for parsing. Keeping the
//! build and parse halves free of I/O makes them deterministic and easy to
//! test.
//!
//! `HttpRequest` deliberately has no body field: the form never exposes one,
//! so no request body is ever sent, POST and PUT included.

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method selectable in the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `TableClient::build_request` from a `RequestConfig`; executed by
/// the transport. Headers are the user's parsed header object, with
/// `Content-Type: application/json` forced in for non-GET methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to `TableClient::parse_response` for status checks and JSON decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
