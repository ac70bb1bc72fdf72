//! Core for a dynamic-table HTTP client: dispatch an ad-hoc request and
//! shape the JSON response into rows and columns.
//!
//! # Overview
//! The user supplies a URL, a method, and header text; `TableClient::dispatch`
//! issues the request and yields either a `TabularResult` for a table
//! renderer or a single failure message. `TableForm` holds the mutable form
//! fields and the one result-or-error slot a UI binds to.
//!
//! # Design
//! - `TableClient` is stateless; the build and parse halves of a dispatch
//!   are separate pure methods, with network execution in `transport`.
//! - Column headers come from the first row's key set only, in insertion
//!   order. Later rows may have other keys; the resulting misaligned cells
//!   are preserved behavior, not corrected.
//! - No request body is ever sent, POST and PUT included; the form has no
//!   body field.
//! - Every failure (header parse, non-2xx status, transport, body decode)
//!   collapses into `DispatchError`, terminal for that attempt.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod table;
pub mod transport;

pub use client::TableClient;
pub use config::RequestConfig;
pub use error::DispatchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{Outcome, TableForm};
pub use table::{normalize, Row, TabularResult};
