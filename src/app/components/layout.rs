//! Page shell: head assets, sidebar, navbar, and the active section.

use dioxus::prelude::*;

use crate::app::components::{Navbar, Sidebar};
use crate::app::motion;
use crate::app::nav_context::use_nav;
use crate::app::pages::{About, Contact, Projects, Resume, Skills};
use crate::nav::Section;

/// Main layout component. Mounts exactly one section at a time; the other
/// four are not in the tree at all, so they occupy no space and are not
/// reachable by tab order.
#[component]
pub fn Layout() -> Element {
    let nav = use_nav();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "Subhashish Tarafdar - Portfolio" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/assets/style.css")
        }
        document::Link {
            rel: "icon",
            r#type: "image/png",
            href: asset!("/assets/images/favicon.png")
        }
        // Ionicons custom element (icon capability provider, visual only)
        document::Script {
            r#type: "module",
            src: "https://unpkg.com/ionicons@5.5.2/dist/ionicons/ionicons.esm.js",
        }
        document::Script {
            nomodule: true,
            src: "https://unpkg.com/ionicons@5.5.2/dist/ionicons/ionicons.js",
        }

        // Body content
        main {
            Sidebar {}
            div { class: "main-content", style: motion::MAIN_CONTENT.style(),
                Navbar {}
                {
                    match nav.active() {
                        Section::About => rsx! { About {} },
                        Section::Projects => rsx! { Projects {} },
                        Section::Skills => rsx! { Skills {} },
                        Section::Resume => rsx! { Resume {} },
                        Section::Contact => rsx! { Contact {} },
                    }
                }
            }
        }
    }
}
