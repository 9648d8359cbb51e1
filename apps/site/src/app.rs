//! Root page component — single-column section stack with a sticky footer.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::contact::ContactSection;
use crate::experience::ExperienceSection;
use crate::hero::Hero;
use crate::projects::ProjectsSection;
use crate::skills::SkillsSection;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Consume the pre-launch dataset on first render and seed the gallery
    // with the full project list (default filter state shows everything).
    use_hook(|| {
        let initial = crate::INITIAL_STATE.lock().unwrap().take();
        if let Some(state) = initial {
            *VISIBLE.write() = state.portfolio.projects.clone();
            *CORE.write() = Some(state);
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "page",

            Hero {}

            main {
                class: "page-main",
                SkillsSection {}
                ProjectsSection {}
                ExperienceSection {}
                ContactSection {}
            }

            Footer {}
        }
    }
}

/// Footer — copyright line plus the same outbound links as the hero.
#[component]
fn Footer() -> Element {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return rsx! { footer { class: "footer" } },
    };
    let profile = &state.portfolio.profile;
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-inner",
                span {
                    class: "footer-copy",
                    "\u{00a9} {year} {profile.name}. All rights reserved."
                }
                div {
                    class: "footer-links",
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
                    a { href: "mailto:{profile.email}", "Email" }
                }
            }
        }
    }
}
