//! Behavioral tests for the navigation state core.
//!
//! Exercises the state holder and selection contract without any rendering
//! layer: exactly one section is ever visible, transitions are total and
//! idempotent, and the sidebar flag is independent of the active section.

use tarafdar_portfolio::nav::{NavState, Section};

/// Sections reported visible by the selector, in navigation order.
fn visible_sections(state: NavState) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|&s| state.is_section_visible(s))
        .collect()
}

#[test]
fn fresh_state_starts_on_about_with_sidebar_closed() {
    let state = NavState::new();
    assert_eq!(state.active(), Section::About);
    assert!(!state.sidebar_open());
    assert_eq!(visible_sections(state), vec![Section::About]);
}

#[test]
fn exactly_one_section_visible_after_every_transition() {
    let mut state = NavState::new();
    for target in Section::ALL {
        state.set_active(target);
        assert_eq!(visible_sections(state), vec![target]);
    }
}

#[test]
fn nav_control_indicator_tracks_the_visible_section() {
    let mut state = NavState::new();
    for target in Section::ALL {
        state.set_active(target);
        let active_controls: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|&s| state.is_nav_control_active(s))
            .collect();
        assert_eq!(active_controls, vec![target]);
        assert!(state.is_section_visible(target));
    }
}

#[test]
fn set_active_is_idempotent() {
    let mut state = NavState::new();
    state.set_active(Section::Skills);
    let after_first = state;
    state.set_active(Section::Skills);
    assert_eq!(state, after_first);
    assert_eq!(state.active(), Section::Skills);
}

#[test]
fn sidebar_toggle_is_an_involution() {
    let mut state = NavState::new();
    state.toggle_sidebar();
    assert!(state.sidebar_open());
    state.toggle_sidebar();
    assert!(!state.sidebar_open());
    assert_eq!(state, NavState::new());
}

#[test]
fn sidebar_and_section_are_independent() {
    let mut state = NavState::new();

    state.set_active(Section::Resume);
    assert!(!state.sidebar_open(), "set_active must not touch the sidebar");

    state.toggle_sidebar();
    assert_eq!(
        state.active(),
        Section::Resume,
        "toggle_sidebar must not touch the active section"
    );

    state.set_active(Section::Contact);
    assert!(state.sidebar_open(), "set_active must not reset the sidebar");
}

#[test]
fn any_section_reaches_any_other_section() {
    for from in Section::ALL {
        for to in Section::ALL {
            let mut state = NavState::new();
            state.set_active(from);
            state.set_active(to);
            assert_eq!(state.active(), to);
        }
    }
}

#[test]
fn navigation_scenario() {
    let mut state = NavState::new();

    // Initial load: only About visible.
    assert!(state.is_section_visible(Section::About));
    for other in [Section::Projects, Section::Skills, Section::Resume, Section::Contact] {
        assert!(!state.is_section_visible(other));
    }

    // Navigate to Projects.
    state.set_active(Section::Projects);
    assert!(state.is_section_visible(Section::Projects));
    assert!(!state.is_section_visible(Section::About));
    assert!(state.is_nav_control_active(Section::Projects));

    // Open the sidebar: section untouched.
    state.toggle_sidebar();
    assert!(state.sidebar_open());
    assert_eq!(state.active(), Section::Projects);

    // Double navigation to Contact is a no-op the second time.
    state.set_active(Section::Contact);
    let snapshot = state;
    state.set_active(Section::Contact);
    assert_eq!(state, snapshot);
    assert_eq!(state.active(), Section::Contact);
}
