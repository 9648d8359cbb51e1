//! Folio core — portfolio dataset and project filtering.
//!
//! Module map:
//! - `types`: tag vocabulary and the profile/skill/project/experience records
//! - `data`: the built-in dataset every surface renders
//! - `filter`: tag + free-text filtering over the project list
//!
//! Rendering lives elsewhere (the Dioxus site, the CLI). This crate is pure
//! data and pure functions, which is what keeps every surface filtering
//! identically.

pub mod data;
pub mod filter;
pub mod types;

pub use data::portfolio;
