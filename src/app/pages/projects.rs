//! Projects section: card grid with tech badges.

use dioxus::prelude::*;

use crate::app::motion;

struct Project {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
}

const PROJECTS: [Project; 5] = [
    Project {
        title: "Sandlines",
        description: "Voter engagement platform built with React Native, TypeScript, \
                      Firebase, and Stripe integration for secure payments and real-time \
                      data synchronization.",
        technologies: &["React Native", "TypeScript", "Firebase", "Stripe"],
    },
    Project {
        title: "RippleStreet",
        description: "Social event platform leveraging React Native and AWS Amplify for \
                      scalable backend services, user authentication, and real-time event \
                      management.",
        technologies: &["React Native", "AWS Amplify", "Authentication"],
    },
    Project {
        title: "Noritz Procard",
        description: "Professional installer tool with local database management, data \
                      encryption, and offline functionality for field technicians.",
        technologies: &["React Native", "SQLite", "Encryption", "Offline"],
    },
    Project {
        title: "Face App",
        description: "Face detection application built with Flutter and Google ML Kit for \
                      real-time facial recognition and analysis features.",
        technologies: &["Flutter", "Google ML Kit", "Computer Vision"],
    },
    Project {
        title: "Identify That",
        description: "Plant identification app using React Native with Wikipedia API \
                      integration for comprehensive plant information and recognition \
                      capabilities.",
        technologies: &["React Native", "Wikipedia API", "Image Recognition"],
    },
];

/// Projects section component.
#[component]
pub fn Projects() -> Element {
    rsx! {
        article { class: "portfolio", "data-page": "projects", style: motion::PAGE.style(),
            header {
                h2 { class: "h2 article-title", "Projects" }
            }

            section { class: "projects",
                div { class: "project-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        div {
                            class: "project-card",
                            key: "{project.title}",
                            style: motion::CARD.stagger(200, i as u32).style(),
                            div { class: "project-content",
                                h3 { class: "project-title", {project.title} }
                                p { class: "project-description", {project.description} }
                                div { class: "project-technologies",
                                    for tech in project.technologies {
                                        span { class: "tech-badge", key: "{tech}", {*tech} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
