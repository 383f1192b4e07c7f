use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::storage::Storage;

use super::handlers::{get_stats, health_check, shorten_url, AppState};

pub fn create_api_router(storage: Arc<dyn Storage>, public_base_url: String) -> Router {
    let state = Arc::new(AppState {
        storage,
        public_base_url,
    });

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/shorten", post(shorten_url))
        .route("/api/stats/{code}", get(get_stats))
        .with_state(state)
}
