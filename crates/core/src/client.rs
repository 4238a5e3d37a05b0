//! Directory client contract.
//!
//! The widget only ever talks to a [`DirectoryClient`], obtained once from a
//! [`DirectoryClientFactory`] supplied by the host. Every failure collapses
//! into [`DirectoryError`]; callers treat all variants alike.

use std::sync::Arc;

use async_trait::async_trait;

use crate::filter::build_user_query;
use crate::types::{rows_from_entries, DirectoryEntry, Row, UserQuery};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("directory request failed: {0}")]
    Transport(String),
    /// The directory answered with a non-success status.
    #[error("directory returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not a valid `users` payload.
    #[error("malformed directory response: {0}")]
    Decode(String),
    /// The factory could not produce a client (missing token, bad base URL).
    #[error("directory client unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Capability to run a `users` query against the directory.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<DirectoryEntry>, DirectoryError>;
}

/// Host-supplied async factory for the directory client.
#[async_trait]
pub trait DirectoryClientFactory: Send + Sync {
    async fn client(&self) -> Result<Arc<dyn DirectoryClient>, DirectoryError>;
}

/// Build the user query for `query_text`, run it, and project the response
/// into rows.
pub async fn search_users(
    client: &dyn DirectoryClient,
    query_text: &str,
) -> Result<Vec<Row>, DirectoryError> {
    let query = build_user_query(query_text);
    tracing::debug!(filter = query.filter.as_str(), "Querying directory users");
    let entries = client.query_users(&query).await?;
    Ok(rows_from_entries(entries))
}

/// Obtain the client from `factory`, then run [`search_users`]. A factory
/// failure is reported like any other query failure.
pub async fn search_with_factory(
    factory: &dyn DirectoryClientFactory,
    query_text: &str,
) -> Result<Vec<Row>, DirectoryError> {
    let client = factory.client().await?;
    search_users(client.as_ref(), query_text).await
}
