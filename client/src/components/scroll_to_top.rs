//! Floating button that smooth-scrolls the page back to the top.

use leptos::prelude::*;

use crate::state::scroll::{ScrollTopControl, Visibility};
use crate::util::browser::{MediaQueryProbe, WindowScrollSurface};

/// The floating scroll-to-top button.
///
/// Hidden until the page is scrolled past the show threshold. The icon is
/// fixed at initialization from the OS color-scheme hint and never follows
/// the in-page theme toggle.
#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let control = StoredValue::new(ScrollTopControl::new(WindowScrollSurface, &MediaQueryProbe));
    let visibility = RwSignal::new(Visibility::Hidden);
    let icon = control.with_value(|c| c.icon_src());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = crate::util::browser::scroll_offset_y();
            control.update_value(|c| visibility.set(c.on_scroll(offset)));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <img
            id="scroll-to-top"
            class="scroll-to-top"
            src=icon
            alt="Back to top"
            style:display=move || visibility.get().display()
            on:click=move |_| control.with_value(|c| c.on_click())
        />
    }
}
