//! Ionicons wrapper component.

use dioxus::prelude::*;

/// Renders an `<ion-icon>` custom element by name.
///
/// rsx cannot spell the hyphenated tag, so the element is emitted as raw
/// HTML inside a span. The Ionicons script registers the custom element at
/// runtime; until then (or if it never loads) the icon renders empty, which
/// degrades visuals only.
#[component]
pub fn Icon(name: &'static str) -> Element {
    let html = format!("<ion-icon name=\"{name}\"></ion-icon>");

    rsx! {
        span { class: "icon", dangerous_inner_html: html }
    }
}
