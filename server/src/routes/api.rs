//! REST API v1 endpoints
//!
//! JSON access to the configured cards. All endpoints return JSON responses.
//!
//! ## API Structure
//!
//! ```text
//! /api/v1/
//! ├── health          GET     Health check
//! ├── cards           GET     List configured cards
//! └── cards/{idx}     GET     Get one configured card
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument};
use wxcardrs_core::WeatherCard;

use crate::state::AppState;

/// Standard API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: ApiErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ApiErrorDetails {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(resource: &str) -> (StatusCode, Json<Self>) {
        (
            StatusCode::NOT_FOUND,
            Json(Self::new("NOT_FOUND", format!("{} not found", resource))),
        )
    }
}

/// Create the complete v1 API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // System endpoints
        .route("/health", get(health_check))
        // Resource endpoints
        .route("/cards", get(list_cards))
        .route("/cards/{idx}", get(get_card))
}

/// Health check endpoint
///
/// Returns basic health status of the service.
#[instrument]
async fn health_check() -> impl IntoResponse {
    debug!("Health check requested");
    Json(json!({
        "status": "ok",
        "service": "wxcardrs",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List configured cards
#[instrument(skip(state))]
async fn list_cards(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config.cards.clone())
}

/// Get one configured card by index
#[instrument(skip(state))]
async fn get_card(
    State(state): State<AppState>,
    Path(idx): Path<usize>,
) -> Result<Json<WeatherCard>, (StatusCode, Json<ApiError>)> {
    match state.config.cards.get(idx) {
        Some(card) => Ok(Json(card.clone())),
        None => Err(ApiError::not_found("Card")),
    }
}
