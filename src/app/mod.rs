//! Dioxus application root.
//!
//! Provides the App component that owns the navigation context and renders
//! the page shell. There is no router: the active section is in-memory UI
//! state and resets on every fresh load.

use dioxus::prelude::*;

pub mod components;
pub mod motion;
pub mod nav_context;
pub mod pages;

use components::Layout;
use nav_context::use_nav_provider;

/// Root app component.
#[component]
pub fn App() -> Element {
    // Initialize navigation context at app root (shared section + sidebar state)
    use_nav_provider();

    rsx! {
        Layout {}
    }
}
