//! The user-editable request configuration.

use serde::{Deserialize, Serialize};

use crate::http::HttpMethod;

/// Parameters for one ad-hoc HTTP call, owned by the form session.
///
/// The fields map one-to-one onto the form's inputs and persist across
/// dispatches; nothing here is reset by the core. `headers_raw` is the
/// header input's literal text and, when non-empty, must parse as a JSON
/// object of string values — `TableClient::build_request` rejects anything
/// else before any network activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestConfig {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub headers_raw: String,
}
