//! Search box for the project gallery.
//!
//! Every keystroke writes the query signal and recomputes the visible list in
//! the same event tick. The query is matched verbatim downstream, so the
//! clear button is offered for any non-empty text, whitespace included.

use dioxus::prelude::*;

use super::apply_filters;
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let query = QUERY.read();
    let has_query = !query.is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search projects\u{2026}",
                value: "{query}",
                oninput: move |e: Event<FormData>| {
                    *QUERY.write() = e.value();
                    apply_filters();
                },
            }

            if has_query {
                button {
                    class: "search-clear",
                    onclick: move |_| {
                        *QUERY.write() = String::new();
                        apply_filters();
                    },
                    "\u{00D7}"
                }
            }
        }
    }
}
