//! Reusable UI components.
//!
//! `theme_toggle` and `scroll_to_top` are the page chrome, mounted once in
//! `App` so they live for the whole page; the rest render article data.

pub mod article_card;
pub mod scroll_to_top;
pub mod sidebar;
pub mod theme_toggle;
