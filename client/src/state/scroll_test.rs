use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::state::theme::{PageTheme, ThemePreference, ThemeStore, ThemeToggle};

/// Counts scroll-to-top requests.
#[derive(Clone, Default)]
struct RecordingSurface {
    requests: Rc<RefCell<usize>>,
}

impl RecordingSurface {
    fn requests(&self) -> usize {
        *self.requests.borrow()
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to_top(&self) {
        *self.requests.borrow_mut() += 1;
    }
}

struct FixedProbe(bool);

impl ColorSchemeProbe for FixedProbe {
    fn is_dark(&self) -> bool {
        self.0
    }
}

// =============================================================
// Visibility rule
// =============================================================

#[test]
fn hidden_at_origin() {
    assert_eq!(visibility_at(0.0), Visibility::Hidden);
}

#[test]
fn hidden_exactly_at_threshold() {
    assert_eq!(visibility_at(100.0), Visibility::Hidden);
}

#[test]
fn visible_just_past_threshold() {
    assert_eq!(visibility_at(101.0), Visibility::Visible);
    assert_eq!(visibility_at(100.5), Visibility::Visible);
}

#[test]
fn display_maps_states_to_css_values() {
    assert_eq!(Visibility::Hidden.display(), "none");
    assert_eq!(Visibility::Visible.display(), "block");
}

// =============================================================
// Control state machine
// =============================================================

#[test]
fn starts_hidden() {
    let control = ScrollTopControl::new(RecordingSurface::default(), &FixedProbe(false));
    assert_eq!(control.visibility(), Visibility::Hidden);
}

#[test]
fn on_scroll_is_idempotent_in_the_offset() {
    let mut control = ScrollTopControl::new(RecordingSurface::default(), &FixedProbe(false));

    for _ in 0..10 {
        assert_eq!(control.on_scroll(250.0), Visibility::Visible);
    }
    for _ in 0..10 {
        assert_eq!(control.on_scroll(40.0), Visibility::Hidden);
    }
}

#[test]
fn on_scroll_tracks_the_threshold_in_both_directions() {
    let mut control = ScrollTopControl::new(RecordingSurface::default(), &FixedProbe(false));

    assert_eq!(control.on_scroll(101.0), Visibility::Visible);
    assert_eq!(control.on_scroll(100.0), Visibility::Hidden);
    assert_eq!(control.on_scroll(350.0), Visibility::Visible);
    assert_eq!(control.on_scroll(0.0), Visibility::Hidden);
}

#[test]
fn every_click_requests_a_scroll() {
    let surface = RecordingSurface::default();
    let control = ScrollTopControl::new(surface.clone(), &FixedProbe(false));

    // No guard against rapid repeated clicks: three clicks, three requests.
    control.on_click();
    control.on_click();
    control.on_click();
    assert_eq!(surface.requests(), 3);
}

// =============================================================
// Icon selection
// =============================================================

#[test]
fn dark_scheme_picks_the_dark_icon() {
    let control = ScrollTopControl::new(RecordingSurface::default(), &FixedProbe(true));
    assert_eq!(control.icon_src(), ICON_DARK);
}

#[test]
fn light_scheme_picks_the_light_icon() {
    let control = ScrollTopControl::new(RecordingSurface::default(), &FixedProbe(false));
    assert_eq!(control.icon_src(), ICON_LIGHT);
}

#[derive(Clone, Default)]
struct NullStore;

impl ThemeStore for NullStore {
    fn load(&self) -> Option<ThemePreference> {
        None
    }

    fn save(&self, _pref: ThemePreference) {}
}

struct NullPage;

impl PageTheme for NullPage {
    fn apply(&self, _pref: ThemePreference) {}
}

#[test]
fn icon_is_unaffected_by_theme_toggling() {
    let control = ScrollTopControl::new(RecordingSurface::default(), &FixedProbe(true));
    let icon_at_load = control.icon_src();

    let mut toggle = ThemeToggle::initialize(NullStore, NullPage);
    toggle.on_click();
    toggle.on_click();
    toggle.on_click();

    assert_eq!(control.icon_src(), icon_at_load);
}
