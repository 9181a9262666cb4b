//! The persisted light/dark theme toggle.
//!
//! DESIGN
//! ======
//! The control never touches browser types. Reads and writes go through the
//! [`ThemeStore`] and [`PageTheme`] capabilities, so the same state machine
//! runs under an in-memory fake store in tests and under `localStorage` in
//! the browser. The initial value comes from the store alone; the OS
//! color-scheme signal is consulted only by the scroll button, for its icon,
//! and that asymmetry is deliberate.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the persisted theme preference.
pub const STORAGE_KEY: &str = "lantern_theme";

/// Attribute set on the document root element; the stylesheet keys off it.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

/// Button label while the current theme is light.
pub const LABEL_TO_DARK: &str = "Switch to dark mode";

/// Button label while the current theme is dark.
pub const LABEL_TO_LIGHT: &str = "Switch to light mode";

/// The two-valued persisted display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stored / attribute form: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two literals reads as absent,
    /// so a corrupted key falls back to the default.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the action the next click performs. Always names the other
    /// mode, never the current one.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => LABEL_TO_DARK,
            Self::Dark => LABEL_TO_LIGHT,
        }
    }
}

/// Durable, origin-scoped storage for the preference.
///
/// Reads treat an unavailable store as absent and writes are best-effort;
/// the control has no error path for storage failures.
pub trait ThemeStore {
    fn load(&self) -> Option<ThemePreference>;
    fn save(&self, pref: ThemePreference);
}

/// The page root's visual-state attribute, consumed by the stylesheet.
pub trait PageTheme {
    fn apply(&self, pref: ThemePreference);
}

/// The theme toggle control.
///
/// Owns the current preference and keeps the store and the page attribute in
/// sync with it. Events arrive as plain method calls; the component layer
/// registers the actual click listener.
pub struct ThemeToggle<S, P> {
    store: S,
    page: P,
    current: ThemePreference,
}

impl<S: ThemeStore, P: PageTheme> ThemeToggle<S, P> {
    /// Read the stored preference (default light when absent) and apply it
    /// to the page root.
    pub fn initialize(store: S, page: P) -> Self {
        let current = store.load().unwrap_or_default();
        page.apply(current);
        Self { store, page, current }
    }

    /// Flip the preference: apply the new value to the page root, persist
    /// it, and return it so the caller can refresh the label.
    pub fn on_click(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.page.apply(self.current);
        self.store.save(self.current);
        self.current
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Current action label, per [`ThemePreference::toggle_label`].
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.current.toggle_label()
    }
}
