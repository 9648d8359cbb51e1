//! Skill grid — one proportional bar per skill on a five-point scale.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SkillsSection() -> Element {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return rsx! { section { class: "section", id: "skills" } },
    };

    rsx! {
        section {
            class: "section",
            id: "skills",
            h2 { class: "section-title", "Skills" }
            div {
                class: "card skills-grid",
                for skill in state.portfolio.skills.iter() {
                    SkillBar { name: skill.name.clone(), level: skill.level }
                }
            }
        }
    }
}

/// Single skill row: name, `n/5` figure, and a proportional fill bar.
#[component]
pub fn SkillBar(name: String, level: u8) -> Element {
    let pct = (level as f32 / 5.0) * 100.0;

    rsx! {
        div {
            class: "skill",
            div {
                class: "skill-head",
                span { "{name}" }
                span { class: "skill-level", "{level}/5" }
            }
            div {
                class: "skill-track",
                div { class: "skill-fill", style: "width: {pct}%;" }
            }
        }
    }
}
