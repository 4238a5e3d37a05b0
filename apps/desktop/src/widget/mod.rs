//! Search widget — form plus result table over one `WidgetState`.

mod results_table;
mod search_form;

use dioxus::prelude::*;
use dirsearch_core::{search_with_factory, WidgetState};

use crate::state::DirectoryHost;
use results_table::ResultsTable;
use search_form::SearchForm;

/// Owns the widget state for its mounted lifetime. The only writers are the
/// text-change handler and the search completion task.
#[component]
pub fn SearchWidget() -> Element {
    let host = use_context::<DirectoryHost>();
    let policy = host.policy;
    let mut state = use_signal(move || WidgetState::new(policy));

    let on_search = move |_: ()| {
        let ticket = state.write().begin_search();
        let factory = host.factory.clone();
        // Fire and forget: no loading state, no cancellation.
        spawn(async move {
            let outcome = search_with_factory(factory.as_ref(), &ticket.query_text).await;
            state.write().complete_search(&ticket, outcome);
        });
    };

    let snapshot = state.read().clone();

    rsx! {
        SearchView {
            state: snapshot,
            on_change: move |value: Option<String>| state.write().set_query_text(value),
            on_search,
        }
    }
}

/// Stateless rendering of one `WidgetState` snapshot. The result area is
/// only emitted when the last applied search returned rows.
#[component]
fn SearchView(
    state: WidgetState,
    on_change: EventHandler<Option<String>>,
    on_search: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "search-widget",
            span { class: "search-title", "Search for a user!" }

            SearchForm {
                query_text: state.query_text().to_string(),
                on_change,
                on_search,
            }

            if state.has_results() {
                div {
                    class: "search-results",
                    ResultsTable { rows: state.rows().to_vec() }
                }
            }
        }
    }
}
