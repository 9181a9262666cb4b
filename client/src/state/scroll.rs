//! The floating scroll-to-top button.
//!
//! Visibility is a pure function of the current scroll offset, recomputed
//! on every scroll notification and never stored. The icon is fixed
//! once at construction from the OS color-scheme hint; the in-page theme
//! toggle never changes it.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset, in pixels, strictly above which the button is shown.
pub const SHOW_THRESHOLD_PX: f64 = 100.0;

/// Icon asset used when the OS color scheme prefers dark.
pub const ICON_DARK: &str = "/icon/up-arrow-dark.svg";

/// Icon asset used otherwise.
pub const ICON_LIGHT: &str = "/icon/up-arrow-light.svg";

/// Display state of the button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// CSS `display` value for the state.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "block",
        }
    }
}

/// Pure visibility rule: shown strictly above [`SHOW_THRESHOLD_PX`].
#[must_use]
pub fn visibility_at(offset_y: f64) -> Visibility {
    if offset_y > SHOW_THRESHOLD_PX {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// One-shot OS/browser color-scheme hint.
///
/// Sampled exactly once, at control construction. An unsupported query
/// reads as "not dark".
pub trait ColorSchemeProbe {
    fn is_dark(&self) -> bool;
}

/// Capability to request the smooth scroll back to the page origin.
pub trait ScrollSurface {
    fn scroll_to_top(&self);
}

/// The scroll-to-top control.
///
/// Starts hidden; the component renders that state explicitly rather than
/// leaving the initial display to the platform.
pub struct ScrollTopControl<S> {
    surface: S,
    visibility: Visibility,
    icon: &'static str,
}

impl<S: ScrollSurface> ScrollTopControl<S> {
    /// Sample the color-scheme probe once and pick the icon asset.
    pub fn new(surface: S, probe: &dyn ColorSchemeProbe) -> Self {
        let icon = if probe.is_dark() { ICON_DARK } else { ICON_LIGHT };
        Self {
            surface,
            visibility: Visibility::Hidden,
            icon,
        }
    }

    /// Scroll notification. Idempotent in the offset value; called at
    /// native event frequency with no debouncing.
    pub fn on_scroll(&mut self, offset_y: f64) -> Visibility {
        self.visibility = visibility_at(offset_y);
        self.visibility
    }

    /// Click: request the smooth scroll. Repeated clicks each request
    /// again; the platform owns the resulting animation.
    pub fn on_click(&self) {
        self.surface.scroll_to_top();
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Icon asset path chosen at construction.
    #[must_use]
    pub fn icon_src(&self) -> &'static str {
        self.icon
    }
}
