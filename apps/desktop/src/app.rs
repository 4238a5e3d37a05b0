//! Root application component.

use dioxus::prelude::*;

use crate::state::DirectoryHost;
use crate::widget::SearchWidget;
use crate::INITIAL_HOST;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        INITIAL_HOST
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(DirectoryHost::from_cwd)
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",
            SearchWidget {}
        }
    }
}
