//! DirSearch core — search the directory for a user.
//!
//! # Modules
//!
//! - [`types`] — Directory entries, display rows, user query, table columns
//! - [`filter`] — OData `startswith` filter construction and literal escaping
//! - [`validate`] — Advisory validation of the search text
//! - [`client`] — `DirectoryClient` / `DirectoryClientFactory` contract and errors
//! - [`state`] — Search widget state and its transitions
//! - [`config`] — `.dirsearch.toml` loading

pub mod client;
pub mod config;
pub mod filter;
pub mod state;
pub mod types;
pub mod validate;

use std::path::PathBuf;

pub use client::{search_users, search_with_factory, DirectoryClient, DirectoryClientFactory, DirectoryError};
pub use config::{load_config, DirSearchConfig};
pub use filter::{build_user_query, escape_literal, user_filter};
pub use state::{Completion, CompletionPolicy, SearchTicket, WidgetState};
pub use types::{DirectoryEntry, Row, UserQuery, USER_COLUMNS};
pub use validate::validate;

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.dirsearch` on Unix, `%APPDATA%/dirsearch` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("dirsearch"))
    } else {
        home_dir().map(|h| h.join(".dirsearch"))
    }
}
