//! Experience & education timeline cards.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn ExperienceSection() -> Element {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return rsx! { section { class: "section", id: "experience" } },
    };

    rsx! {
        section {
            class: "section",
            id: "experience",
            h2 { class: "section-title", "Experience & Education" }
            div {
                class: "experience-grid",
                for entry in state.portfolio.experience.iter() {
                    div {
                        class: "card experience-card",
                        div { class: "experience-role", "{entry.role}" }
                        div { class: "experience-org", "{entry.org} \u{2022} {entry.period}" }
                        ul {
                            class: "experience-highlights",
                            for point in entry.highlights.iter() {
                                li { "{point}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
