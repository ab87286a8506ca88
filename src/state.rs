//! Shared application state for all routes.

use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected at startup; tests substitute an in-memory double.
    pub store: Arc<dyn UserStore>,
}
