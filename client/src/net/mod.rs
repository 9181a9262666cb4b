//! Article API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns the article library and renders article bodies to HTML;
//! the client only fetches JSON and displays it. All calls are browser-only
//! and degrade to `None` during SSR.

pub mod api;
pub mod types;
