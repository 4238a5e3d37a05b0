//! Search form: required text field with advisory validation and the
//! primary Search button.

use dioxus::prelude::*;
use dirsearch_core::validate::{validate, SEARCH_FOR_LABEL};

#[component]
pub fn SearchForm(
    query_text: String,
    on_change: EventHandler<Option<String>>,
    on_search: EventHandler<()>,
) -> Element {
    // Shown under the field only; the button stays enabled.
    let error = validate(Some(query_text.as_str()));
    let has_error = !error.is_empty();

    rsx! {
        div {
            class: "search-form",

            div {
                class: if has_error { "text-field invalid" } else { "text-field" },
                label {
                    class: "text-field-label",
                    r#for: "search-for",
                    "{SEARCH_FOR_LABEL}"
                    span { class: "required-marker", "*" }
                }
                input {
                    id: "search-for",
                    class: "text-field-input",
                    r#type: "text",
                    required: true,
                    value: "{query_text}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| on_change.call(Some(e.value())),
                }
                if has_error {
                    div { class: "text-field-error", role: "alert", "{error}" }
                }
            }

            div {
                class: "search-actions",
                button {
                    class: "primary-button",
                    r#type: "button",
                    title: "Search",
                    onclick: move |_| on_search.call(()),
                    "Search"
                }
            }
        }
    }
}
