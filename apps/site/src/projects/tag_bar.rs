//! Tag chip row — `All` plus one chip per vocabulary tag.

use dioxus::prelude::*;

use folio_core::filter::TagFilter;
use folio_core::types::Tag;

use super::apply_filters;
use crate::state::*;

#[component]
pub fn TagBar() -> Element {
    let selected = *TAG.read();

    rsx! {
        div {
            class: "tag-bar",

            button {
                class: if selected == TagFilter::All { "chip active" } else { "chip" },
                onclick: move |_| {
                    *TAG.write() = TagFilter::All;
                    apply_filters();
                },
                "All"
            }

            for tag in Tag::ALL {
                button {
                    class: if selected == TagFilter::Only(tag) { "chip active" } else { "chip" },
                    onclick: move |_| {
                        *TAG.write() = TagFilter::Only(tag);
                        apply_filters();
                    },
                    {tag.label()}
                }
            }
        }
    }
}
