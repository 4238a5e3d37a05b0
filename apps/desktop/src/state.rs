//! Host-provided context for the search widget.

use std::sync::Arc;

use dirsearch_core::{load_config, CompletionPolicy, DirectoryClientFactory};
use dirsearch_graph::GraphClientFactory;
use tracing::info;

/// What the host hands the widget: the directory client factory and the
/// completion policy for overlapping searches. Shared through the Dioxus
/// context.
#[derive(Clone)]
pub struct DirectoryHost {
    pub factory: Arc<dyn DirectoryClientFactory>,
    pub policy: CompletionPolicy,
}

impl DirectoryHost {
    /// Load config for the current working directory and wire up the Graph factory.
    pub fn from_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let config = load_config(&cwd);
        info!(
            base_url = config.graph_base_url.as_str(),
            policy = ?config.completion_policy,
            "Directory host configured"
        );
        let policy = config.completion_policy;
        Self { factory: Arc::new(GraphClientFactory::new(config)), policy }
    }
}
