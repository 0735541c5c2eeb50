//! About section: bio and service cards.

use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::motion;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "phone-portrait-outline",
        title: "Mobile Apps",
        text: "Professional development of cross-platform applications using React \
               Native and Flutter for iOS and Android platforms.",
    },
    Service {
        icon: "code-slash-outline",
        title: "Web Development",
        text: "High-quality development of responsive websites and web applications \
               using modern technologies like React and Node.js.",
    },
    Service {
        icon: "cloud-outline",
        title: "Cloud Solutions",
        text: "Scalable backend services and cloud architecture using AWS Amplify, \
               Firebase, and Azure for robust application infrastructure.",
    },
    Service {
        icon: "git-network-outline",
        title: "API Integration",
        text: "Expert integration of third-party APIs, payment gateways like Stripe, \
               and social authentication systems for enhanced functionality.",
    },
];

/// About section component.
#[component]
pub fn About() -> Element {
    rsx! {
        article { class: "about", "data-page": "about", style: motion::PAGE.style(),
            header {
                h2 { class: "h2 article-title", "About me" }
            }

            section { class: "about-text",
                p {
                    "Over 6+ years in the IT industry with expertise in mobile and web \
                     development. Proven ability to manage projects from planning through \
                     production in cross-functional teams. Proficient in React Native, \
                     Flutter, and Node.js, with strong experience using AWS Amplify for \
                     scalable backend services."
                }
                p {
                    "Skilled in Firebase (Firestore, Authentication, Cloud Functions) and \
                     integrated social logins (Google, Facebook, Apple). Developed and \
                     consumed RESTful APIs, implemented push notifications and monetization \
                     strategies with Google AdMob and Stripe. Demonstrated architect-level \
                     design and native iOS development with Swift, alongside unit testing \
                     to ensure application stability. Excellent communicator and team \
                     player with a robust problem-solving foundation."
                }
            }

            section { class: "service",
                h3 { class: "h3 service-title", "What I'm Doing" }

                ul { class: "service-list",
                    for (i, service) in SERVICES.iter().enumerate() {
                        li {
                            class: "service-item",
                            key: "{service.title}",
                            style: motion::CARD.stagger(200, i as u32).style(),
                            div { class: "service-icon-box",
                                Icon { name: service.icon }
                            }
                            div { class: "service-content-box",
                                h4 { class: "h4 service-item-title", {service.title} }
                                p { class: "service-item-text", {service.text} }
                            }
                        }
                    }
                }
            }
        }
    }
}
