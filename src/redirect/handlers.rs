use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::handlers::{error_response, lookup_error_response};
use crate::storage::Storage;

pub struct RedirectState {
    pub storage: Arc<dyn Storage>,
}

/// Redirect to the original URL, counting one click
pub async fn redirect_url(
    State(state): State<Arc<RedirectState>>,
    Path(code): Path<String>,
) -> Response {
    let record = match state.storage.resolve(&code).await {
        Ok(record) => record,
        Err(err) => return lookup_error_response(&code, err).into_response(),
    };

    // The store itself accepts any string
    let location = match HeaderValue::from_str(&record.original_url) {
        Ok(location) => location,
        Err(err) => {
            tracing::error!(short_code = %code, error = %err, "stored URL is not a valid Location header");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                .into_response();
        }
    };

    tracing::info!(
        short_code = %code,
        clicks = record.click_count,
        url = %record.original_url,
        "redirecting"
    );

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub links: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<RedirectState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "URL Shortener API".to_string(),
        links: state.storage.len().await,
    })
}
