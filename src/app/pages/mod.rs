//! Content section components, one per navigable section.

pub mod about;
pub mod contact;
pub mod projects;
pub mod resume;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use projects::Projects;
pub use resume::Resume;
pub use skills::Skills;
