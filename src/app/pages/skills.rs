//! Skills section: categorized grid of skill badges.

use dioxus::prelude::*;

use crate::app::components::Icon;
use crate::app::motion;

struct Skill {
    icon: &'static str,
    name: &'static str,
}

struct Category {
    title: &'static str,
    skills: &'static [Skill],
}

const CATEGORIES: [Category; 9] = [
    Category {
        title: "Cross-platform & Native Development",
        skills: &[
            Skill { icon: "phone-portrait-outline", name: "React Native" },
            Skill { icon: "logo-apple", name: "iOS (Swift)" },
            Skill { icon: "diamond-outline", name: "Flutter" },
        ],
    },
    Category {
        title: "Languages & Packages",
        skills: &[
            Skill { icon: "logo-javascript", name: "JavaScript" },
            Skill { icon: "code-slash-outline", name: "TypeScript" },
        ],
    },
    Category {
        title: "State Management & Navigation",
        skills: &[
            Skill { icon: "logo-react", name: "React Redux" },
            Skill { icon: "navigate-outline", name: "React Navigation" },
        ],
    },
    Category {
        title: "Backend & Cloud Services",
        skills: &[
            Skill { icon: "logo-nodejs", name: "Node.js" },
            Skill { icon: "server-outline", name: "Express.js" },
            Skill { icon: "cloud-outline", name: "AWS Amplify" },
            Skill { icon: "layers-outline", name: "MS Azure" },
        ],
    },
    Category {
        title: "Databases & Authentication",
        skills: &[
            Skill { icon: "flame-outline", name: "Firebase Firestore" },
            Skill { icon: "shield-checkmark-outline", name: "Firebase Authentication" },
            Skill { icon: "flash-outline", name: "Cloud Functions" },
        ],
    },
    Category {
        title: "Push & Notifications",
        skills: &[Skill { icon: "notifications-outline", name: "Firebase Push Notifications" }],
    },
    Category {
        title: "Monetization & Payments",
        skills: &[
            Skill { icon: "card-outline", name: "Stripe" },
            Skill { icon: "trending-up-outline", name: "Google AdMob" },
        ],
    },
    Category {
        title: "APIs & Integrations",
        skills: &[
            Skill { icon: "location-outline", name: "Google Places Autocomplete" },
            Skill { icon: "storefront-outline", name: "WooCommerce API" },
        ],
    },
    Category {
        title: "Development Tools & Collaboration",
        skills: &[
            Skill { icon: "logo-apple", name: "Xcode" },
            Skill { icon: "logo-android", name: "Android Studio" },
            Skill { icon: "code-slash-outline", name: "VSCode" },
            Skill { icon: "git-branch-outline", name: "Git" },
            Skill { icon: "people-outline", name: "Azure DevOps" },
            Skill { icon: "logo-github", name: "GitHub" },
        ],
    },
];

/// Skills section component.
#[component]
pub fn Skills() -> Element {
    rsx! {
        article { class: "skills", "data-page": "skills", style: motion::PAGE.style(),
            header {
                h2 { class: "h2 article-title", "Skills" }
            }

            section { class: "skills-content",
                for (ci, category) in CATEGORIES.iter().enumerate() {
                    div {
                        class: "skills-category",
                        key: "{category.title}",
                        style: motion::CATEGORY.stagger(200, ci as u32).style(),
                        h3 { class: "skills-category-title", {category.title} }
                        div { class: "skills-grid",
                            for (si, skill) in category.skills.iter().enumerate() {
                                div {
                                    class: "skill-item",
                                    key: "{skill.name}",
                                    style: motion::CARD.stagger(100, si as u32).style(),
                                    div { class: "skill-icon",
                                        Icon { name: skill.icon }
                                    }
                                    span { class: "skill-name", {skill.name} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
