//! Browser-backed implementations of the page-chrome capabilities.
//!
//! Client-side (hydrate): real web-sys calls against `window`. Server-side
//! (SSR): silent no-ops so server rendering stays deterministic. Missing
//! storage, an unsupported media query, or a detached document degrade the
//! same way the underlying platform does: reads come back absent, writes
//! are dropped.

use crate::state::scroll::{ColorSchemeProbe, ScrollSurface};
use crate::state::theme::{PageTheme, ROOT_ATTRIBUTE, STORAGE_KEY, ThemePreference, ThemeStore};

/// `localStorage`-backed preference store, under [`STORAGE_KEY`].
#[derive(Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
            ThemePreference::parse(&value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, pref: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, pref.as_str());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pref;
        }
    }
}

/// Applies the preference as the `data-theme` attribute on `<html>`.
#[derive(Clone, Copy, Default)]
pub struct DocumentRootTheme;

impl PageTheme for DocumentRootTheme {
    fn apply(&self, pref: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.set_attribute(ROOT_ATTRIBUTE, pref.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pref;
        }
    }
}

/// Samples `(prefers-color-scheme: dark)` once per call.
#[derive(Clone, Copy, Default)]
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn is_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Issues the smooth scroll back to the page origin.
#[derive(Clone, Copy, Default)]
pub struct WindowScrollSurface;

impl ScrollSurface for WindowScrollSurface {
    fn scroll_to_top(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

/// Current vertical scroll offset of the page, in pixels.
#[must_use]
pub fn scroll_offset_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
