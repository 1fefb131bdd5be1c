use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}
