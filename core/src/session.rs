//! The form session: mutable config plus a single outcome slot.
//!
//! # Design
//! `TableForm` is what a UI collaborator owns for the lifetime of the form.
//! The config fields persist across fetches and are never reset here. The
//! outcome slot holds at most one of a table or a failure message; each
//! fetch replaces it wholesale when the dispatch completes, and the prior
//! outcome stays visible until then. Overlapping fetches are not guarded
//! against: the last write wins.

use crate::client::TableClient;
use crate::config::RequestConfig;
use crate::table::TabularResult;

/// What the last completed fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Table(TabularResult),
    Failure(String),
}

/// One form session: editable request fields and the latest outcome.
#[derive(Clone, Default)]
pub struct TableForm {
    pub config: RequestConfig,
    client: TableClient,
    outcome: Option<Outcome>,
}

impl TableForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch the current config and replace the outcome slot.
    pub fn fetch(&mut self) {
        let outcome = match self.client.dispatch(&self.config) {
            Ok(table) => Outcome::Table(table),
            Err(err) => Outcome::Failure(err.to_string()),
        };
        self.outcome = Some(outcome);
    }

    /// The table to render, if the last fetch succeeded.
    pub fn table(&self) -> Option<&TabularResult> {
        match &self.outcome {
            Some(Outcome::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// The failure message to show, if the last fetch failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Failure(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}
