//! `.dirsearch.toml` config loading.
//!
//! Lookup order, later wins: built-in defaults, `<config_dir>/config.toml`,
//! `<project_root>/.dirsearch.toml`, then the `DIRSEARCH_GRAPH_URL`
//! environment variable. Unreadable or invalid files are skipped with a
//! warning.

use std::path::Path;

use tracing::{debug, warn};

use crate::state::CompletionPolicy;

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com";
pub const DEFAULT_TOKEN_ENV: &str = "DIRSEARCH_GRAPH_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding `graph_base_url`.
pub const GRAPH_URL_ENV: &str = "DIRSEARCH_GRAPH_URL";

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = ".dirsearch.toml";

const KNOWN_CONFIG_KEYS: &[&str] =
    &["graph_base_url", "token_env", "timeout_secs", "completion_policy"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSearchConfig {
    /// Directory API root, without the version segment.
    pub graph_base_url: String,
    /// Name of the environment variable holding the bearer token.
    pub token_env: String,
    /// Transport timeout for a single query.
    pub timeout_secs: u64,
    pub completion_policy: CompletionPolicy,
}

impl Default for DirSearchConfig {
    fn default() -> Self {
        Self {
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            completion_policy: CompletionPolicy::default(),
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_keys(table: &toml::Table, source: &Path) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
        match suggestion {
            Some(s) if edit_distance(key, s) <= 3 => warn!(
                key = key.as_str(),
                suggestion = *s,
                file = %source.display(),
                "Unknown config key — did you mean '{s}'?"
            ),
            _ => warn!(
                key = key.as_str(),
                file = %source.display(),
                "Unknown config key (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }
}

/// Merge the keys of one parsed config file into `config`.
pub fn apply_config_table(config: &mut DirSearchConfig, table: &toml::Table, source: &Path) {
    warn_unknown_keys(table, source);

    if let Some(url) = table.get("graph_base_url").and_then(|v| v.as_str()) {
        config.graph_base_url = url.trim_end_matches('/').to_string();
    }

    if let Some(name) = table.get("token_env").and_then(|v| v.as_str()) {
        config.token_env = name.to_string();
    }

    if let Some(secs) = table.get("timeout_secs").and_then(|v| v.as_integer()) {
        match u64::try_from(secs) {
            Ok(secs) if secs > 0 => config.timeout_secs = secs,
            _ => warn!(value = secs, file = %source.display(), "timeout_secs must be positive"),
        }
    }

    if let Some(policy) = table.get("completion_policy").and_then(|v| v.as_str()) {
        match policy.parse() {
            Ok(p) => config.completion_policy = p,
            Err(e) => warn!(file = %source.display(), "{e}"),
        }
    }
}

/// Read and merge a single config file. Missing files are silently skipped.
pub fn load_config_file(config: &mut DirSearchConfig, path: &Path) {
    if !path.exists() {
        return;
    }
    debug!(file = %path.display(), "Loading config");
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(file = %path.display(), "Failed to read config: {e}");
            return;
        }
    };
    match content.parse::<toml::Table>() {
        Ok(table) => apply_config_table(config, &table, path),
        Err(e) => warn!(file = %path.display(), "Failed to parse config: {e}"),
    }
}

/// Load the effective configuration for `project_root`.
pub fn load_config(project_root: &Path) -> DirSearchConfig {
    let mut config = DirSearchConfig::default();
    if let Some(dir) = crate::config_dir() {
        load_config_file(&mut config, &dir.join("config.toml"));
    }
    load_config_file(&mut config, &project_root.join(PROJECT_CONFIG_FILE));

    if let Ok(url) = std::env::var(GRAPH_URL_ENV) {
        if !url.is_empty() {
            config.graph_base_url = url.trim_end_matches('/').to_string();
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(s: &str) -> toml::Table {
        s.parse().unwrap()
    }

    #[test]
    fn defaults_point_at_graph() {
        let c = DirSearchConfig::default();
        assert_eq!(c.graph_base_url, "https://graph.microsoft.com");
        assert_eq!(c.token_env, "DIRSEARCH_GRAPH_TOKEN");
        assert_eq!(c.timeout_secs, 30);
        assert_eq!(c.completion_policy, CompletionPolicy::LastArrivalWins);
    }

    #[test]
    fn table_overrides_known_keys() {
        let mut c = DirSearchConfig::default();
        apply_config_table(
            &mut c,
            &table(
                r#"
                graph_base_url = "http://localhost:8080/"
                token_env = "MY_TOKEN"
                timeout_secs = 5
                completion_policy = "latest-issued"
                "#,
            ),
            Path::new("test.toml"),
        );
        assert_eq!(c.graph_base_url, "http://localhost:8080");
        assert_eq!(c.token_env, "MY_TOKEN");
        assert_eq!(c.timeout_secs, 5);
        assert_eq!(c.completion_policy, CompletionPolicy::LatestIssuedOnly);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let mut c = DirSearchConfig::default();
        apply_config_table(
            &mut c,
            &table("timeout_secs = -1\ncompletion_policy = \"fastest\"\ngraph_url = \"x\""),
            Path::new("test.toml"),
        );
        assert_eq!(c, DirSearchConfig::default());
    }

    #[test]
    fn api_version_is_not_a_config_key() {
        assert!(!KNOWN_CONFIG_KEYS.contains(&"api_version"));
        let mut c = DirSearchConfig::default();
        apply_config_table(&mut c, &table("api_version = \"beta\""), Path::new("test.toml"));
        assert_eq!(c, DirSearchConfig::default());
        assert_eq!(crate::build_user_query("Jane").api_version, "v1.0");
    }

    #[test]
    fn project_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "timeout_secs = 7\n").unwrap();
        let mut c = DirSearchConfig::default();
        load_config_file(&mut c, &dir.path().join(PROJECT_CONFIG_FILE));
        assert_eq!(c.timeout_secs, 7);
    }

    #[test]
    fn broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "timeout_secs = [").unwrap();
        let mut c = DirSearchConfig::default();
        load_config_file(&mut c, &path);
        assert_eq!(c, DirSearchConfig::default());
    }

    #[test]
    fn edit_distance_suggests_close_keys() {
        assert_eq!(edit_distance("token_en", "token_env"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }
}
