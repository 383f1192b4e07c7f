use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{
    self,
    handlers::{endpoint_not_found, method_not_allowed},
};
use crate::config::Config;
use crate::redirect;
use crate::storage::Storage;

/// Build the full application: API routes, redirects, JSON fallbacks and
/// request tracing, all sharing one store.
pub fn create_app_router(storage: Arc<dyn Storage>, config: &Config) -> Router {
    let api_router =
        api::create_api_router(Arc::clone(&storage), config.public_base_url.clone());
    let redirect_router = redirect::create_redirect_router(storage);

    api_router
        .merge(redirect_router)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
}
