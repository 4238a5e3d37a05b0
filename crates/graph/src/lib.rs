//! Microsoft Graph implementation of the DirSearch directory client.
//!
//! - [`GraphClient`] issues `GET {base}/{version}/users?$select=..&$filter=..`
//!   with a bearer token and decodes the `value` array.
//! - [`GraphClientFactory`] builds the client on first use and hands out the
//!   same instance afterwards.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dirsearch_core::types::{DirectoryEntry, UserQuery};
use dirsearch_core::{DirSearchConfig, DirectoryClient, DirectoryClientFactory, DirectoryError};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// One page of a `users` collection. `@odata.nextLink` is ignored.
#[derive(Deserialize)]
struct UsersPage {
    value: Vec<DirectoryEntry>,
}

#[derive(Deserialize)]
struct GraphErrorBody {
    error: GraphErrorDetail,
}

#[derive(Deserialize)]
struct GraphErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Decode a `users` response body.
pub fn decode_users(body: &str) -> Result<Vec<DirectoryEntry>, DirectoryError> {
    let page: UsersPage = serde_json::from_str(body)?;
    Ok(page.value)
}

/// `code: message` from a Graph error body, or the raw body when it is not one.
fn error_summary(body: &str) -> String {
    match serde_json::from_str::<GraphErrorBody>(body) {
        Ok(e) if !e.error.code.is_empty() => format!("{}: {}", e.error.code, e.error.message),
        Ok(e) => e.error.message,
        Err(_) => body.chars().take(512).collect(),
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GraphClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GraphClient {
    pub fn new(base_url: &str, token: String, timeout: Duration) -> Result<Self, DirectoryError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), token })
    }

    /// Full request URL for a user query.
    pub fn users_url(&self, query: &UserQuery) -> Result<Url, DirectoryError> {
        let endpoint = format!("{}/{}/users", self.base_url, query.api_version);
        let select = query.select.join(",");
        Url::parse_with_params(&endpoint, [("$select", select.as_str()), ("$filter", query.filter.as_str())])
            .map_err(|e| DirectoryError::Unavailable(format!("invalid directory URL '{endpoint}': {e}")))
    }
}

#[async_trait]
impl DirectoryClient for GraphClient {
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        let url = self.users_url(query)?;
        debug!(url = %url, "GET users");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| DirectoryError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(DirectoryError::Status { status: status.as_u16(), body: error_summary(&body) });
        }

        let entries = decode_users(&body)?;
        debug!(count = entries.len(), "users response decoded");
        Ok(entries)
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Builds one [`GraphClient`] from config on the first `client()` call.
/// The bearer token comes from the environment variable named by
/// `config.token_env` unless one was supplied up front.
pub struct GraphClientFactory {
    config: DirSearchConfig,
    token: Option<String>,
    client: OnceCell<Arc<GraphClient>>,
}

impl GraphClientFactory {
    pub fn new(config: DirSearchConfig) -> Self {
        Self { config, token: None, client: OnceCell::new() }
    }

    pub fn with_token(config: DirSearchConfig, token: String) -> Self {
        Self { config, token: Some(token), client: OnceCell::new() }
    }

    fn resolve_token(&self) -> Result<String, DirectoryError> {
        if let Some(ref token) = self.token {
            return Ok(token.clone());
        }
        match std::env::var(&self.config.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(DirectoryError::Unavailable(format!(
                "no bearer token: set {}",
                self.config.token_env
            ))),
        }
    }

    async fn build(&self) -> Result<Arc<GraphClient>, DirectoryError> {
        let token = self.resolve_token()?;
        let client = GraphClient::new(
            &self.config.graph_base_url,
            token,
            Duration::from_secs(self.config.timeout_secs),
        )?;
        info!(base_url = self.config.graph_base_url.as_str(), "Directory client ready");
        Ok(Arc::new(client))
    }
}

#[async_trait]
impl DirectoryClientFactory for GraphClientFactory {
    async fn client(&self) -> Result<Arc<dyn DirectoryClient>, DirectoryError> {
        let client = self.client.get_or_try_init(|| self.build()).await?;
        let client: Arc<dyn DirectoryClient> = client.clone();
        Ok(client)
    }
}
