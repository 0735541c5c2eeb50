//! Navigation context shared across the app.
//!
//! Wraps the pure [`NavState`] in a reactive signal so the navbar, sidebar,
//! and section components all read and mutate the same state.

use dioxus::prelude::*;

use crate::nav::{NavState, Section};

/// Global navigation state shared via context
#[derive(Clone, Copy)]
pub struct NavContext {
    state: Signal<NavState>,
}

impl NavContext {
    /// The section currently rendered.
    pub fn active(&self) -> Section {
        (self.state)().active()
    }

    /// Whether the mobile sidebar is expanded.
    pub fn sidebar_open(&self) -> bool {
        (self.state)().sidebar_open()
    }

    /// True when `section` is the one rendered content block.
    pub fn is_section_visible(&self, section: Section) -> bool {
        (self.state)().is_section_visible(section)
    }

    /// True when the nav control for `section` carries the active indicator.
    pub fn is_nav_control_active(&self, section: Section) -> bool {
        (self.state)().is_nav_control_active(section)
    }

    /// Switch the active section and scroll the viewport back to the origin.
    pub fn go_to(&self, section: Section) {
        let mut state = self.state;
        state.with_mut(|s| s.set_active(section));

        tracing::debug!("navigated to {section}");

        #[cfg(target_arch = "wasm32")]
        scroll_to_origin();
    }

    /// Flip the sidebar between collapsed and expanded.
    pub fn toggle_sidebar(&self) {
        let mut state = self.state;
        state.with_mut(NavState::toggle_sidebar);
    }
}

/// Initialize navigation context provider - call once at app root
pub fn use_nav_provider() {
    let state = use_signal(NavState::default);

    use_context_provider(|| NavContext { state });
}

/// Get navigation context - use in any component
pub fn use_nav() -> NavContext {
    use_context::<NavContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn scroll_to_origin() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
