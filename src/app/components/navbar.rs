//! Section navigation bar.

use dioxus::prelude::*;

use crate::app::motion;
use crate::app::nav_context::use_nav;
use crate::nav::Section;

/// Navigation bar with one button per section. The button whose section is
/// active carries the `active` class; clicking any button transitions the
/// shared navigation state.
#[component]
pub fn Navbar() -> Element {
    let nav = use_nav();

    rsx! {
        nav { class: "navbar", style: motion::NAVBAR.style(),
            ul { class: "navbar-list",
                for section in Section::ALL {
                    li { class: "navbar-item", key: "{section}",
                        button {
                            class: if nav.is_nav_control_active(section) { "navbar-link active" } else { "navbar-link" },
                            "data-nav-link": section.as_str(),
                            onclick: move |_| nav.go_to(section),
                            {section.label()}
                        }
                    }
                }
            }
        }
    }
}
