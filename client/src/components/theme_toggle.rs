//! Header button toggling the persisted light/dark theme.

use leptos::prelude::*;

use crate::state::theme::{ThemePreference, ThemeToggle};
use crate::util::browser::{DocumentRootTheme, LocalStorageThemeStore};

/// The theme toggle button.
///
/// The control initializes after hydration so the stored preference is read
/// in the browser; until then the label reflects the default light theme,
/// which matches what the server rendered.
#[component]
pub fn ThemeToggleButton() -> impl IntoView {
    let theme = RwSignal::new(ThemePreference::Light);
    let control = StoredValue::new(None::<ThemeToggle<LocalStorageThemeStore, DocumentRootTheme>>);

    // Effects only run in the browser, where storage is reachable.
    Effect::new(move || {
        let toggle = ThemeToggle::initialize(LocalStorageThemeStore, DocumentRootTheme);
        theme.set(toggle.current());
        control.set_value(Some(toggle));
    });

    let on_click = move |_| {
        control.update_value(|slot| {
            if let Some(toggle) = slot.as_mut() {
                theme.set(toggle.on_click());
            }
        });
    };

    view! {
        <button id="toggle-mode" class="theme-toggle" on:click=on_click>
            {move || theme.get().toggle_label()}
        </button>
    }
}
