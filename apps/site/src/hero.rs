//! Hero — intro column (name, summary, links, résumé) plus the snapshot card.

use dioxus::prelude::*;

use crate::skills::SkillBar;
use crate::state::*;

/// Highlight bars shown in the snapshot card, independent of the full skill
/// list below the fold.
const FOCUS: [(&str, u8); 3] =
    [("AI/QA Automation", 5), ("Full-stack Dev", 4), ("Robotics/Perception", 4)];

#[component]
pub fn Hero() -> Element {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return rsx! { header { class: "hero" } },
    };
    let profile = &state.portfolio.profile;

    rsx! {
        header {
            class: "hero",

            div {
                class: "hero-intro",
                span { class: "hero-badge", "Open to internships & research collabs" }
                h1 { class: "hero-name", "{profile.name}" }
                p { class: "hero-tagline", "{profile.tagline}" }
                p { class: "hero-summary", "{profile.summary}" }

                div {
                    class: "hero-meta",
                    span { class: "hero-location", "{profile.location}" }
                    a { href: "mailto:{profile.email}", "{profile.email}" }
                    a {
                        href: "{profile.linkedin}",
                        target: "_blank",
                        rel: "noreferrer",
                        "LinkedIn"
                    }
                    a {
                        href: "{profile.github}",
                        target: "_blank",
                        rel: "noreferrer",
                        "GitHub"
                    }
                }

                div {
                    class: "hero-actions",
                    a {
                        class: "button",
                        href: "{profile.resume_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Download R\u{e9}sum\u{e9}"
                    }
                }
            }

            SnapshotCard {}
        }
    }
}

/// Quick-facts card beside the intro: the timeline at a glance plus three
/// highlight bars.
#[component]
fn SnapshotCard() -> Element {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return rsx! { div { class: "card snapshot" } },
    };

    rsx! {
        div {
            class: "card snapshot",
            div { class: "card-title", "Snapshot" }

            div {
                class: "snapshot-grid",

                // Timeline column, most recent first
                div {
                    class: "snapshot-timeline",
                    for entry in state.portfolio.experience.iter().rev() {
                        div {
                            class: "snapshot-entry",
                            div { class: "snapshot-org", "{entry.org}" }
                            div { class: "snapshot-period", "{entry.period}" }
                        }
                    }
                }

                // Highlight bars column
                div {
                    class: "snapshot-focus",
                    for (name, level) in FOCUS {
                        SkillBar { name: name.to_string(), level }
                    }
                }
            }
        }
    }
}
