//! DirSearch Desktop — Dioxus-powered directory user search.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod state;
mod widget;

use app::App;
use state::DirectoryHost;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_HOST: Mutex<Option<DirectoryHost>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dirsearch=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let host = DirectoryHost::from_cwd();
    if let Ok(mut slot) = INITIAL_HOST.lock() {
        *slot = Some(host);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("DirSearch")
                            .with_inner_size(LogicalSize::new(900.0, 640.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 320.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
