//! Core types shared across DirSearch: raw directory entries, display rows,
//! the user query sent to the directory, and the result table's column schema.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Query constants
// ---------------------------------------------------------------------------

/// Directory API version every user query targets.
pub const API_VERSION: &str = "v1.0";

/// Fields requested from the directory, in request order.
pub const SELECT_FIELDS: [&str; 3] = ["displayName", "mail", "userPrincipalName"];

/// Name fields matched with `startswith` when building the user filter.
pub const FILTER_FIELDS: [&str; 3] = ["givenName", "surname", "displayName"];

// ---------------------------------------------------------------------------
// Directory entries and rows
// ---------------------------------------------------------------------------

/// One user as returned by the directory. Every field the widget does not
/// display is dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub mail: Option<String>,
    #[serde(default)]
    pub user_principal_name: Option<String>,
}

/// Three-field projection of a [`DirectoryEntry`] shown in the result table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub display_name: Option<String>,
    pub mail: Option<String>,
    pub user_principal_name: Option<String>,
}

impl From<DirectoryEntry> for Row {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            display_name: entry.display_name,
            mail: entry.mail,
            user_principal_name: entry.user_principal_name,
        }
    }
}

impl Row {
    /// Cell text for a column key. Absent values render as empty cells.
    pub fn cell(&self, key: &str) -> &str {
        let value = match key {
            "displayName" => &self.display_name,
            "mail" => &self.mail,
            "userPrincipalName" => &self.user_principal_name,
            _ => return "",
        };
        value.as_deref().unwrap_or("")
    }
}

/// Project raw directory entries into rows, preserving response order.
pub fn rows_from_entries(entries: Vec<DirectoryEntry>) -> Vec<Row> {
    entries.into_iter().map(Row::from).collect()
}

// ---------------------------------------------------------------------------
// User query
// ---------------------------------------------------------------------------

/// A single `users` query: which fields to select, the filter expression,
/// and the API version to call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserQuery {
    pub select: Vec<String>,
    pub filter: String,
    pub api_version: String,
}

// ---------------------------------------------------------------------------
// Result table schema
// ---------------------------------------------------------------------------

/// Column definition for the read-only result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Field key on [`Row`] (`displayName`, `mail`, `userPrincipalName`).
    pub key: &'static str,
    /// Header text.
    pub name: &'static str,
    /// Narrowest rendered width, in pixels.
    pub min_width: u32,
    /// Widest rendered width, in pixels. The CLI also clips cells to this many chars.
    pub max_width: u32,
    /// Whether the user may drag the column wider or narrower.
    pub resizable: bool,
}

/// Fixed schema of the user result table.
pub const USER_COLUMNS: [Column; 3] = [
    Column { key: "displayName", name: "Display name", min_width: 50, max_width: 100, resizable: true },
    Column { key: "mail", name: "Mail", min_width: 50, max_width: 100, resizable: true },
    Column {
        key: "userPrincipalName",
        name: "User Principal Name",
        min_width: 100,
        max_width: 200,
        resizable: true,
    },
];
