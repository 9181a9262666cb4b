//! # client
//!
//! Leptos + WASM frontend for the Lantern blog.
//!
//! Pages and components render the article library served by the `server`
//! crate. The page chrome (the persisted light/dark theme toggle and the
//! floating scroll-to-top button) lives in [`state`] as pure control state
//! machines whose browser capabilities are implemented in [`util`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
