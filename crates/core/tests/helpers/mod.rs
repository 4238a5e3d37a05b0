//! Test harness for search flow tests.
//!
//! `ScriptedClient` answers `users` queries from a per-query-text script and
//! records every query it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dirsearch_core::types::{DirectoryEntry, UserQuery};
use dirsearch_core::{DirectoryClient, DirectoryClientFactory, DirectoryError};

/// Scripted answer for one query text.
pub enum Reply {
    Entries(Vec<DirectoryEntry>),
    Fail(&'static str),
}

#[derive(Default)]
pub struct ScriptedClient {
    script: Mutex<HashMap<String, (Duration, Reply)>>,
    pub received: Mutex<Vec<UserQuery>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer any filter mentioning `'text'` with `reply` after `delay_ms`.
    pub fn on(self: &Arc<Self>, text: &str, delay_ms: u64, reply: Reply) -> Arc<Self> {
        self.script
            .lock()
            .unwrap()
            .insert(format!("startswith(givenName,'{text}')"), (Duration::from_millis(delay_ms), reply));
        Arc::clone(self)
    }

    pub fn queries(&self) -> Vec<UserQuery> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectoryClient for ScriptedClient {
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        self.received.lock().unwrap().push(query.clone());
        let (delay, result) = {
            let script = self.script.lock().unwrap();
            let hit = script.iter().find(|(needle, _)| query.filter.starts_with(needle.as_str()));
            match hit {
                Some((_, (delay, Reply::Entries(e)))) => (*delay, Ok(e.clone())),
                Some((_, (delay, Reply::Fail(msg)))) => {
                    (*delay, Err(DirectoryError::Status { status: 503, body: msg.to_string() }))
                }
                None => (Duration::ZERO, Ok(vec![])),
            }
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

/// Factory handing out one shared client, counting how often it was asked.
pub struct SharedFactory {
    pub client: Arc<ScriptedClient>,
    pub calls: Mutex<usize>,
}

#[async_trait]
impl DirectoryClientFactory for SharedFactory {
    async fn client(&self) -> Result<Arc<dyn DirectoryClient>, DirectoryError> {
        *self.calls.lock().unwrap() += 1;
        let client: Arc<dyn DirectoryClient> = self.client.clone();
        Ok(client)
    }
}

pub fn jane() -> DirectoryEntry {
    DirectoryEntry {
        display_name: Some("Jane Doe".into()),
        mail: Some("jane@x.com".into()),
        user_principal_name: Some("jane@x.com".into()),
    }
}
