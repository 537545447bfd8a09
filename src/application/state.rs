// src/application/state.rs

use std::sync::Arc;

use crate::services::ResistanceService;

/// Application state shared by command handlers.
/// All fields are Arc-wrapped for thread-safe sharing across concurrent
/// requests; the services themselves are stateless.
pub struct AppState {
    pub resistance_service: Arc<ResistanceService>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            resistance_service: Arc::new(ResistanceService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
