//! Search widget state and its transitions.
//!
//! `WidgetState` has exactly two mutation paths: [`WidgetState::set_query_text`]
//! on every keystroke and [`WidgetState::complete_search`] when a query
//! finishes. [`WidgetState::begin_search`] only hands out a ticket.

use tracing::{debug, error};

use crate::client::DirectoryError;
use crate::types::Row;

/// How completions of overlapping searches are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Every successful completion replaces the rows in arrival order, so a
    /// slow early request can overwrite a faster later one.
    #[default]
    LastArrivalWins,
    /// Only the completion of the most recently issued search is applied.
    LatestIssuedOnly,
}

impl std::str::FromStr for CompletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-arrival" | "last-arrival-wins" => Ok(Self::LastArrivalWins),
            "latest-issued" | "latest-issued-only" => Ok(Self::LatestIssuedOnly),
            other => Err(format!("unknown completion policy '{other}'")),
        }
    }
}

/// Issued by [`WidgetState::begin_search`]; carried by the in-flight query
/// and handed back on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query_text: String,
}

/// What [`WidgetState::complete_search`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Rows were replaced.
    Applied,
    /// The query failed; rows untouched.
    Failed,
    /// A newer search was issued; rows untouched.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    query_text: String,
    rows: Vec<Row>,
    policy: CompletionPolicy,
    /// Sequence number of the last issued search (0 = none yet).
    issued: u64,
}

impl WidgetState {
    pub fn new(policy: CompletionPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// The result table is only shown when there is at least one row.
    pub fn has_results(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Controlled-input update. An absent value clears the text.
    pub fn set_query_text(&mut self, value: Option<String>) {
        self.query_text = value.unwrap_or_default();
    }

    /// Snapshot the current query text for a new search.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket { seq: self.issued, query_text: self.query_text.clone() }
    }

    /// Apply the outcome of a search. Failures are logged and swallowed.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<Row>, DirectoryError>,
    ) -> Completion {
        let rows = match outcome {
            Ok(rows) => rows,
            Err(e) => {
                error!(seq = ticket.seq, query = ticket.query_text.as_str(), "User search failed: {e}");
                return Completion::Failed;
            }
        };

        if self.policy == CompletionPolicy::LatestIssuedOnly && ticket.seq != self.issued {
            debug!(seq = ticket.seq, latest = self.issued, "Discarding stale search result");
            return Completion::Stale;
        }

        debug!(seq = ticket.seq, rows = rows.len(), "Applying search result");
        self.rows = rows;
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> Row {
        Row { display_name: Some(name.into()), ..Row::default() }
    }

    #[test]
    fn starts_empty() {
        let state = WidgetState::default();
        assert_eq!(state.query_text(), "");
        assert!(state.rows().is_empty());
        assert!(!state.has_results());
        assert_eq!(state.policy(), CompletionPolicy::LastArrivalWins);
    }

    #[test]
    fn text_change_leaves_rows() {
        let mut state = WidgetState::default();
        let t = state.begin_search();
        state.complete_search(&t, Ok(vec![row("Jane Doe")]));

        state.set_query_text(Some("Jane".into()));
        assert_eq!(state.query_text(), "Jane");
        assert_eq!(state.rows(), [row("Jane Doe")]);

        state.set_query_text(None);
        assert_eq!(state.query_text(), "");
    }

    #[test]
    fn ticket_snapshots_query_text() {
        let mut state = WidgetState::default();
        state.set_query_text(Some("Ja".into()));
        let t = state.begin_search();
        state.set_query_text(Some("Jan".into()));
        assert_eq!(t.query_text, "Ja");
        assert_eq!(t.seq, 1);
        assert_eq!(state.begin_search().seq, 2);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut state = WidgetState::default();
        let t = state.begin_search();
        state.complete_search(&t, Ok(vec![row("Jane Doe")]));

        let t = state.begin_search();
        let outcome = state.complete_search(&t, Err(DirectoryError::Transport("offline".into())));
        assert_eq!(outcome, Completion::Failed);
        assert_eq!(state.rows(), [row("Jane Doe")]);
    }

    #[test]
    fn empty_success_clears_rows() {
        let mut state = WidgetState::default();
        let t = state.begin_search();
        state.complete_search(&t, Ok(vec![row("Jane Doe")]));
        let t = state.begin_search();
        assert_eq!(state.complete_search(&t, Ok(vec![])), Completion::Applied);
        assert!(!state.has_results());
    }

    #[test]
    fn last_arrival_wins_even_if_issued_first() {
        let mut state = WidgetState::new(CompletionPolicy::LastArrivalWins);
        let first = state.begin_search();
        let second = state.begin_search();
        state.complete_search(&second, Ok(vec![row("second")]));
        assert_eq!(state.complete_search(&first, Ok(vec![row("first")])), Completion::Applied);
        assert_eq!(state.rows(), [row("first")]);
    }

    #[test]
    fn latest_issued_discards_stale_completion() {
        let mut state = WidgetState::new(CompletionPolicy::LatestIssuedOnly);
        let first = state.begin_search();
        let second = state.begin_search();
        state.complete_search(&second, Ok(vec![row("second")]));
        assert_eq!(state.complete_search(&first, Ok(vec![row("first")])), Completion::Stale);
        assert_eq!(state.rows(), [row("second")]);
    }

    #[test]
    fn policy_parses_from_config_names() {
        assert_eq!("last-arrival".parse::<CompletionPolicy>(), Ok(CompletionPolicy::LastArrivalWins));
        assert_eq!("latest-issued".parse::<CompletionPolicy>(), Ok(CompletionPolicy::LatestIssuedOnly));
        assert!("newest".parse::<CompletionPolicy>().is_err());
    }
}
