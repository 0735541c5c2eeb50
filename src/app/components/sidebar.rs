//! Sidebar with identity and contact details.
//!
//! On narrow viewports the contact block is collapsed behind the
//! "Show Contacts" button; the `active` class on the aside expands it.

use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::motion;
use crate::app::nav_context::use_nav;

const LINKEDIN_URL: &str = "https://in.linkedin.com/in/subhashish-tarafdar-1692331a4";

/// Sidebar component.
#[component]
pub fn Sidebar() -> Element {
    let nav = use_nav();

    rsx! {
        aside {
            class: if nav.sidebar_open() { "sidebar active" } else { "sidebar" },
            style: motion::SIDEBAR.style(),

            div { class: "sidebar-info",
                figure { class: "avatar-box", style: motion::AVATAR.style(),
                    img {
                        src: asset!("/assets/images/my-avatar.png"),
                        alt: "Subhashish Tarafdar",
                        width: "80",
                    }
                }

                div { class: "info-content", style: motion::SIDEBAR_INFO.style(),
                    h1 { class: "name", "Subhashish Tarafdar" }
                    p { class: "title", "React Native Developer" }
                }

                button {
                    class: "info_more-btn",
                    onclick: move |_| nav.toggle_sidebar(),
                    span { "Show Contacts" }
                    Icon { name: "chevron-down" }
                }
            }

            div { class: "sidebar-info_more",
                div { class: "separator" }

                ul { class: "contacts-list",
                    ContactItem { icon: "mail-outline", title: "Email",
                        a { class: "contact-link", href: "mailto:anshfitness143@gmail.com",
                            "anshfitness143@gmail.com"
                        }
                    }
                    ContactItem { icon: "phone-portrait-outline", title: "Phone",
                        a { class: "contact-link", href: "tel:+918107951997", "+91 81079 51997" }
                    }
                    ContactItem { icon: "logo-linkedin", title: "LinkedIn",
                        a {
                            class: "contact-link",
                            href: LINKEDIN_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Subhashish Tarafdar"
                        }
                    }
                    ContactItem { icon: "location-outline", title: "Location",
                        address { "Bikaner, Rajasthan" }
                    }
                }

                div { class: "separator" }

                ul { class: "social-list",
                    li { class: "social-item",
                        a {
                            class: "social-link",
                            href: LINKEDIN_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { name: "logo-linkedin" }
                        }
                    }
                    li { class: "social-item",
                        a { class: "social-link", href: "#",
                            onclick: move |evt| evt.prevent_default(),
                            Icon { name: "logo-github" }
                        }
                    }
                    li { class: "social-item",
                        a { class: "social-link", href: "#",
                            onclick: move |evt| evt.prevent_default(),
                            Icon { name: "logo-twitter" }
                        }
                    }
                }
            }
        }
    }
}

/// One row of the contacts list: icon, label, and a caller-supplied value.
#[component]
fn ContactItem(icon: &'static str, title: &'static str, children: Element) -> Element {
    rsx! {
        li { class: "contact-item",
            div { class: "icon-box", Icon { name: icon } }
            div { class: "contact-info",
                p { class: "contact-title", {title} }
                {children}
            }
        }
    }
}
