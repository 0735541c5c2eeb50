//! Personal portfolio - single-page Dioxus web app.
//!
//! This library provides:
//! - A navigation state core (active section + sidebar flag)
//! - Dioxus components for the sidebar, navbar, and five content sections
//! - Declarative entrance-animation metadata rendered as inline CSS

pub mod app;
pub mod nav;
