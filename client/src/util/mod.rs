//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. The capabilities the page-chrome controls depend on are
//! implemented here against web-sys.

pub mod browser;
