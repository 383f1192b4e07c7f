use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::models::{ShortenRequest, ShortenResponse, StatsResponse};
use crate::short_code::is_code_alphabet;
use crate::storage::{Storage, StorageError};
use crate::validation::validate_url;

pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub public_base_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Map a failed lookup to the response the client sees
pub(crate) fn lookup_error_response(short_code: &str, err: StorageError) -> ApiError {
    match err {
        StorageError::NotFound => {
            tracing::warn!(
                short_code = %short_code,
                generated_shape = is_code_alphabet(short_code),
                "short code not found"
            );
            error_response(StatusCode::NOT_FOUND, "Short code not found")
        }
        other => {
            tracing::error!(short_code = %short_code, error = %other, "lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Shorten a URL
pub async fn shorten_url(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected shorten request body");
            let message = match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json"
                }
                _ => "Invalid JSON format",
            };
            return Err(error_response(StatusCode::BAD_REQUEST, message));
        }
    };

    // Any falsy JSON value counts as an absent body
    let has_content = match &body {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(true) => true,
    };
    if !has_content {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Request body is required",
        ));
    }

    if body.get("url").is_none() {
        tracing::warn!("missing 'url' field in shorten request");
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing 'url' field in request body",
        ));
    }

    let request: ShortenRequest = serde_json::from_value(body).map_err(|err| {
        tracing::warn!(error = %err, "'url' field is not a string");
        error_response(StatusCode::BAD_REQUEST, "Invalid URL format")
    })?;

    if let Err(err) = validate_url(&request.url) {
        tracing::warn!(url = %request.url, error = %err, "invalid URL provided");
        return Err(error_response(StatusCode::BAD_REQUEST, "Invalid URL format"));
    }

    match state.storage.create(&request.url).await {
        Ok(short_code) => {
            let short_url = format!("{}/{}", state.public_base_url, short_code);
            tracing::info!(url = %request.url, short_code = %short_code, "shortened URL");
            Ok((
                StatusCode::CREATED,
                Json(ShortenResponse {
                    short_code,
                    short_url,
                }),
            ))
        }
        Err(err) => {
            tracing::error!(url = %request.url, error = %err, "failed to shorten URL");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to generate short code, please try again",
            ))
        }
    }
}

/// Get access statistics for a short code without counting a click
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, ApiError> {
    match state.storage.stats(&code).await {
        Ok(record) => Ok(Json(StatsResponse::from(record))),
        Err(err) => Err(lookup_error_response(&code, err)),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "URL Shortener API is running".to_string(),
    })
}

pub async fn endpoint_not_found() -> ApiError {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

pub async fn method_not_allowed() -> ApiError {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
