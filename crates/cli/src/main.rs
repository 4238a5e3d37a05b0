//! DirSearch CLI — search the directory for users from the terminal.
//!
//! Runs the same query as the desktop widget through `dirsearch-graph`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dirsearch_core::config::load_config_file;
use dirsearch_core::types::{Row, USER_COLUMNS};
use dirsearch_core::{load_config, search_with_factory, user_filter, validate, DirSearchConfig};
use dirsearch_graph::GraphClientFactory;

/// DirSearch CLI — find directory users by name prefix.
#[derive(Parser)]
#[command(name = "dsearch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Extra config file, applied after .dirsearch.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search users whose given name, surname, or display name starts with the query
    Search {
        /// Name prefix
        query: String,
    },
    /// Print the directory filter expression for a query
    Filter {
        /// Name prefix
        query: String,
    },
    /// Check a value against the search field's validation rule
    Validate {
        /// Value to check
        value: String,
    },
}

fn resolve_config(extra: Option<PathBuf>) -> DirSearchConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = load_config(&cwd);
    if let Some(path) = extra {
        if !path.exists() {
            eprintln!("Config file not found: {}", path.display());
            std::process::exit(2);
        }
        load_config_file(&mut config, &path);
    }
    config
}

/// Render rows as a fixed-width table using the result table's columns.
fn format_table(rows: &[Row]) -> String {
    let widths: Vec<usize> = USER_COLUMNS
        .iter()
        .map(|col| {
            let widest = rows.iter().map(|r| r.cell(col.key).chars().count()).max().unwrap_or(0);
            widest.max(col.name.len()).min(col.max_width as usize)
        })
        .collect();

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let clipped: String = cell.chars().take(*w).collect();
                format!("{clipped:<w$}", w = *w)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(USER_COLUMNS.iter().map(|c| c.name).collect());
    out.push('\n');
    for row in rows {
        out.push_str(&line(USER_COLUMNS.iter().map(|c| row.cell(c.key)).collect()));
        out.push('\n');
    }
    out
}

/// Stdout text for `search` and its exit code. Nothing matching exits 1 in
/// both modes; JSON mode still prints `[]`.
fn search_output(rows: &[Row], json: bool) -> serde_json::Result<(String, i32)> {
    let out = if json {
        serde_json::to_string_pretty(rows)? + "\n"
    } else if rows.is_empty() {
        String::new()
    } else {
        format_table(rows)
    };
    Ok((out, i32::from(rows.is_empty())))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dirsearch=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query } => {
            let message = validate(Some(query.as_str()));
            if !message.is_empty() {
                eprintln!("warning: {message}");
            }

            let config = resolve_config(cli.config);
            let factory = GraphClientFactory::new(config);
            let rows = match search_with_factory(&factory, &query).await {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::error!(query = query.as_str(), "User search failed: {e}");
                    eprintln!("Search failed: {e}");
                    std::process::exit(2);
                }
            };

            let (out, code) = match search_output(&rows, cli.json) {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("Failed to encode results: {e}");
                    std::process::exit(2);
                }
            };
            print!("{out}");
            if rows.is_empty() {
                eprintln!("No users matching '{query}'");
            } else if !cli.json {
                eprintln!("\n{} users", rows.len());
            }
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Filter { query } => {
            let filter = user_filter(&query);
            if cli.json {
                println!("{}", serde_json::json!({ "filter": filter }));
            } else {
                println!("{filter}");
            }
        }
        Commands::Validate { value } => {
            let message = validate(Some(value.as_str()));
            if cli.json {
                println!("{}", serde_json::json!({ "valid": message.is_empty(), "message": message }));
            } else if !message.is_empty() {
                println!("{message}");
            }
            if !message.is_empty() {
                std::process::exit(1);
            }
        }
    }
}
