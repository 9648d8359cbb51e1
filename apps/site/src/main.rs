//! Folio site — Dioxus-rendered portfolio page.

use std::sync::Mutex;

use dioxus::prelude::*;
use tracing::info;

mod app;
mod contact;
mod experience;
mod hero;
mod projects;
mod skills;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Build the dataset before launch — store in the Mutex, NOT in a signal
    let initial_state = AppState::load();
    info!(
        projects = initial_state.portfolio.projects.len(),
        skills = initial_state.portfolio.skills.len(),
        "Portfolio data ready"
    );
    let window_title = format!("{} \u{2014} Portfolio", initial_state.portfolio.profile.name);
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_window(
                        WindowBuilder::new()
                            .with_title(window_title)
                            .with_inner_size(LogicalSize::new(1180.0, 860.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 520.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        let _ = window_title;
        dioxus::launch(App);
    }
}
