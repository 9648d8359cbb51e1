//! Global page state using Dioxus signals.

use dioxus::prelude::*;
use folio_core::filter::TagFilter;
use folio_core::types::{Portfolio, Project};

/// Immutable dataset snapshot — built once at startup, never replaced.
pub struct AppState {
    pub portfolio: Portfolio,
}

impl AppState {
    /// Build the page state from the built-in dataset.
    pub fn load() -> Self {
        AppState { portfolio: folio_core::portfolio() }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Core dataset — set once on first render
pub static CORE: GlobalSignal<Option<AppState>> = Signal::global(|| None);

/// Current gallery search text
pub static QUERY: GlobalSignal<String> = Signal::global(|| String::new());

/// Currently selected tag chip
pub static TAG: GlobalSignal<TagFilter> = Signal::global(|| TagFilter::All);

/// Projects currently shown in the gallery
pub static VISIBLE: GlobalSignal<Vec<Project>> = Signal::global(|| vec![]);
