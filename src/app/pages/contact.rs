//! Contact section: embedded map and contact form.
//!
//! The form has no backend. Submission checks that all three fields are
//! present, logs the attempt, and clears the inputs.

use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::motion;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d226697.52002081395!2d73.03059944726562!3d28.01783080!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x393744e7c5c33db1%3A0x73328ac51ac3d7c8!2sBikaner%2C%20Rajasthan%2C%20India!5e0!3m2!1sen!2sin!4v1647608789441!5m2!1sen!2sin";

/// Contact section component.
#[component]
pub fn Contact() -> Element {
    let mut fullname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let missing = fullname().trim().is_empty()
            || email().trim().is_empty()
            || message().trim().is_empty();
        if missing {
            tracing::warn!("contact form submitted with missing fields");
            return;
        }

        tracing::info!(from = %email(), "contact form submitted");
        fullname.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    rsx! {
        article { class: "contact", "data-page": "contact", style: motion::PAGE.style(),
            header {
                h2 { class: "h2 article-title", "Contact" }
            }

            section { class: "mapbox",
                figure {
                    iframe {
                        src: MAP_EMBED_URL,
                        width: "400",
                        height: "300",
                        "loading": "lazy",
                        title: "Google Map",
                    }
                }
            }

            section { class: "contact-form",
                h3 { class: "h3 form-title", "Contact Form" }

                form { class: "form", onsubmit: on_submit,
                    div { class: "input-wrapper",
                        input {
                            class: "form-input",
                            r#type: "text",
                            name: "fullname",
                            placeholder: "Full name",
                            required: true,
                            value: "{fullname}",
                            oninput: move |e| fullname.set(e.value()),
                        }
                        input {
                            class: "form-input",
                            r#type: "email",
                            name: "email",
                            placeholder: "Email address",
                            required: true,
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }

                    textarea {
                        class: "form-input",
                        name: "message",
                        placeholder: "Your Message",
                        required: true,
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }

                    button { class: "form-btn", r#type: "submit",
                        Icon { name: "paper-plane" }
                        span { "Send Message" }
                    }
                }
            }
        }
    }
}
