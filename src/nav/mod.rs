//! Navigation state core.
//!
//! Owns the two pieces of UI state the portfolio has: which section is
//! active and whether the mobile sidebar is expanded. Kept free of any
//! rendering concern so the transition and selection contracts can be
//! tested without a DOM.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The five top-level content sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Projects,
    Skills,
    Resume,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Resume,
        Section::Contact,
    ];

    /// Stable identifier used in markup attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    /// Human-readable label shown on the navigation control.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a markup identifier names no known section.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section identifier: {0:?}")]
pub struct UnknownSectionError(pub String);

impl FromStr for Section {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "about" => Ok(Section::About),
            "projects" => Ok(Section::Projects),
            "skills" => Ok(Section::Skills),
            "resume" => Ok(Section::Resume),
            "contact" => Ok(Section::Contact),
            other => Err(UnknownSectionError(other.to_string())),
        }
    }
}

/// UI state for one page session.
///
/// The two fields are independent: changing the active section never
/// touches the sidebar flag and vice versa. A fresh session starts on
/// About with the sidebar collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    active: Section,
    sidebar_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single section currently rendered.
    pub fn active(self) -> Section {
        self.active
    }

    /// Whether the mobile sidebar is expanded.
    pub fn sidebar_open(self) -> bool {
        self.sidebar_open
    }

    /// Switch the active section. Total and idempotent.
    pub fn set_active(&mut self, section: Section) {
        self.active = section;
    }

    /// Flip the sidebar between collapsed and expanded.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// True for exactly one section at any time: the active one.
    pub fn is_section_visible(self, section: Section) -> bool {
        self.active == section
    }

    /// Same predicate as [`Self::is_section_visible`], applied to the
    /// navigation control for `section`. Controls and content blocks are
    /// independent render targets, hence the separate name.
    pub fn is_nav_control_active(self, section: Section) -> bool {
        self.active == section
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_str() {
        assert_eq!("about".parse::<Section>().unwrap(), Section::About);
        assert_eq!("projects".parse::<Section>().unwrap(), Section::Projects);
        assert_eq!("skills".parse::<Section>().unwrap(), Section::Skills);
        assert_eq!("resume".parse::<Section>().unwrap(), Section::Resume);
        assert_eq!("contact".parse::<Section>().unwrap(), Section::Contact);
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert_eq!(err, UnknownSectionError("blog".to_string()));
        // Identifiers are exact: no case folding, no trimming.
        assert!("About".parse::<Section>().is_err());
        assert!(" about".parse::<Section>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::About.label(), "About");
        assert_eq!(Section::Contact.label(), "Contact");
    }
}
