//! One gallery card: title, blurb, tag badges.

use dioxus::prelude::*;

use folio_core::types::Project;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "card project-card",
            div { class: "project-title", "{project.title}" }
            p { class: "project-blurb", "{project.blurb}" }
            div {
                class: "project-tags",
                for tag in project.tags.iter() {
                    span { class: "badge", {tag.label()} }
                }
            }
        }
    }
}
