//! Contact cards — the ways to reach out. Links only; message delivery is
//! someone else's job.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn ContactSection() -> Element {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return rsx! { section { class: "section", id: "contact" } },
    };
    let profile = &state.portfolio.profile;
    let github_label = profile.github.trim_start_matches("https://");

    rsx! {
        section {
            class: "section",
            id: "contact",
            h2 { class: "section-title", "Let\u{2019}s Connect" }
            p {
                class: "section-lede",
                "Whether you\u{2019}re a recruiter, collaborator, or just curious about my "
                "projects, I\u{2019}d love to hear from you. Reach out for internships, "
                "research, or building something cool together."
            }

            div {
                class: "contact-grid",
                a {
                    class: "card contact-card",
                    href: "mailto:{profile.email}",
                    div { class: "contact-label", "Email" }
                    div { class: "contact-value", "{profile.email}" }
                }
                a {
                    class: "card contact-card",
                    href: "{profile.linkedin}",
                    target: "_blank",
                    rel: "noreferrer",
                    div { class: "contact-label", "LinkedIn" }
                    div { class: "contact-value", "Connect on LinkedIn" }
                }
                a {
                    class: "card contact-card",
                    href: "{profile.github}",
                    target: "_blank",
                    rel: "noreferrer",
                    div { class: "contact-label", "GitHub" }
                    div { class: "contact-value", "{github_label}" }
                }
                div {
                    class: "card contact-card",
                    div { class: "contact-label", "Location" }
                    div { class: "contact-value", "{profile.location}" }
                }
            }
        }
    }
}
