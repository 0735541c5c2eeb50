//! Declarative entrance-animation metadata.
//!
//! Pure presentation configuration: each element role maps to a keyframes
//! name plus a duration/delay/easing triple, rendered as an inline CSS
//! `animation` shorthand. The keyframes themselves live in the stylesheet.
//! Hover and tap effects are plain CSS transitions and need no metadata.

use std::fmt::Write as _;

/// Easing curves used by entrance animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn as_css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// One entrance animation: which keyframes to run and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    keyframes: &'static str,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
}

impl Motion {
    pub const fn new(keyframes: &'static str, duration_ms: u32, delay_ms: u32, easing: Easing) -> Self {
        Self {
            keyframes,
            duration_ms,
            delay_ms,
            easing,
        }
    }

    /// Same animation shifted later by `step_ms * index`, for staggered lists.
    pub const fn stagger(self, step_ms: u32, index: u32) -> Self {
        Self {
            keyframes: self.keyframes,
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms + step_ms * index,
            easing: self.easing,
        }
    }

    /// Inline `animation` shorthand. Fill mode `both` keeps the element at
    /// the first keyframe while the delay runs, so delayed elements do not
    /// flash visible before their entrance.
    pub fn style(&self) -> String {
        let mut css = String::with_capacity(64);
        let _ = write!(
            css,
            "animation: {} {}ms {} {}ms both;",
            self.keyframes,
            self.duration_ms,
            self.easing.as_css(),
            self.delay_ms
        );
        css
    }
}

/// Sidebar slides in from the left.
pub const SIDEBAR: Motion = Motion::new("slide-in-left", 800, 0, Easing::EaseOut);

/// Avatar pops in once the sidebar has landed.
pub const AVATAR: Motion = Motion::new("spin-in", 800, 500, Easing::EaseOut);

/// Name and title fade up after the avatar.
pub const SIDEBAR_INFO: Motion = Motion::new("fade-up", 600, 700, Easing::EaseOut);

/// Main content slides in from the right, slightly behind the sidebar.
pub const MAIN_CONTENT: Motion = Motion::new("slide-in-right", 800, 200, Easing::EaseOut);

/// Navbar drops down last.
pub const NAVBAR: Motion = Motion::new("fade-down", 600, 800, Easing::EaseOut);

/// Section content fades up on every section switch.
pub const PAGE: Motion = Motion::new("fade-up", 600, 200, Easing::EaseOut);

/// First card of a staggered grid; later cards use [`Motion::stagger`].
pub const CARD: Motion = Motion::new("scale-in", 600, 200, Easing::EaseOut);

/// Category block within the skills section.
pub const CATEGORY: Motion = Motion::new("fade-up", 600, 200, Easing::EaseOut);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_shorthand() {
        let m = Motion::new("fade-up", 600, 200, Easing::EaseOut);
        assert_eq!(m.style(), "animation: fade-up 600ms ease-out 200ms both;");
    }

    #[test]
    fn test_stagger_shifts_delay_only() {
        let base = Motion::new("scale-in", 600, 200, Easing::EaseOut);
        let third = base.stagger(200, 2);
        assert_eq!(third.style(), "animation: scale-in 600ms ease-out 600ms both;");
        // Index zero is the base animation unchanged.
        assert_eq!(base.stagger(200, 0), base);
    }
}
