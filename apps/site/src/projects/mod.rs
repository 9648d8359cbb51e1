//! Project gallery — search input, tag chip row, and the filtered card grid.

mod project_card;
mod search_input;
mod tag_bar;

use dioxus::prelude::*;

use folio_core::filter::{filter_projects, FilterState};
use project_card::ProjectCard;
use search_input::SearchInput;
use tag_bar::TagBar;

use crate::state::*;

/// Projects section: controls on top, the card grid (or the empty state)
/// below.
#[component]
pub fn ProjectsSection() -> Element {
    let visible = VISIBLE.read();

    rsx! {
        section {
            class: "section",
            id: "projects",
            h2 { class: "section-title", "Projects" }
            div {
                class: "card projects-card",

                div {
                    class: "projects-controls",
                    SearchInput {}
                    TagBar {}
                }

                if visible.is_empty() {
                    div { class: "projects-empty", "No projects match your search." }
                } else {
                    div {
                        class: "projects-grid",
                        for project in visible.iter() {
                            ProjectCard { project: project.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// Recompute the visible card list from the current query and selected chip.
///
/// Runs synchronously on every input event. The dataset is a handful of
/// entries, so there is nothing worth debouncing or caching.
pub(crate) fn apply_filters() {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return,
    };

    let filter = FilterState { query: QUERY.read().clone(), tag: *TAG.read() };
    let visible: Vec<_> =
        filter_projects(&state.portfolio.projects, &filter).into_iter().cloned().collect();

    *VISIBLE.write() = visible;
}
