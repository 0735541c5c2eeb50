//! Resume section: embedded PDF preview.

use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::motion;

const RESUME_PDF: &str = "/assets/resume/Subhashish_Tarafdar.pdf";

/// Resume section component.
#[component]
pub fn Resume() -> Element {
    rsx! {
        article { class: "resume", "data-page": "resume", style: motion::PAGE.style(),
            header {
                h2 { class: "h2 article-title", "Resume" }
            }

            section { class: "resume-preview",
                div { class: "title-wrapper",
                    div { class: "icon-box", Icon { name: "document-text-outline" } }
                    h3 { class: "h3", "Resume Preview" }
                }
                div { class: "pdf-preview",
                    iframe {
                        src: RESUME_PDF,
                        width: "100%",
                        height: "600",
                        title: "Resume Preview",
                    }
                    p { class: "pdf-fallback",
                        "Your browser does not support PDFs. "
                        a { href: RESUME_PDF, "Download the PDF" }
                        "."
                    }
                }
            }
        }
    }
}
