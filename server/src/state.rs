//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the article library behind an async `RwLock`: handlers take read
//! locks, the background refresh task takes the write lock. Lock holds are
//! short because everything served is already rendered at load time.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::library::Library;

#[derive(Clone)]
pub struct AppState {
    pub library: Arc<RwLock<Library>>,
}

impl AppState {
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self {
            library: Arc::new(RwLock::new(library)),
        }
    }
}
