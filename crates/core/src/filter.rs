//! OData filter construction for the directory `users` query.
//!
//! The query text is embedded in single-quoted string literals, so every
//! single quote is doubled (OData literal escaping) before it is inserted.

use crate::types::{UserQuery, API_VERSION, FILTER_FIELDS, SELECT_FIELDS};

/// Escape text for use inside an OData single-quoted string literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// `startswith(givenName,'Q') or startswith(surname,'Q') or startswith(displayName,'Q')`
pub fn user_filter(query_text: &str) -> String {
    let literal = escape_literal(query_text);
    FILTER_FIELDS
        .iter()
        .map(|field| format!("startswith({field},'{literal}')"))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Build the full user query for the given search text.
pub fn build_user_query(query_text: &str) -> UserQuery {
    UserQuery {
        select: SELECT_FIELDS.iter().map(|f| f.to_string()).collect(),
        filter: user_filter(query_text),
        api_version: API_VERSION.to_string(),
    }
}
