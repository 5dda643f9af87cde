//! UI routes module - HTMX frontend

use axum::{response::IntoResponse, Router};

use crate::state::AppState;

// Sub-modules
pub mod cards;
pub mod dashboard;

/// Create UI router with all page and component routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .merge(dashboard::routes())
        // Card fragments
        .merge(cards::routes())
        // Anything unmatched gets the 404 page
        .fallback(not_found)
}

/// Fallback handler for unknown paths
async fn not_found() -> Result<impl IntoResponse, AppError> {
    use crate::templates::NotFoundTemplate;
    use askama::Template;
    use axum::http::StatusCode;
    use axum::response::Html;

    let template = NotFoundTemplate;
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Custom error type for UI routes
#[derive(Debug)]
pub enum AppError {
    TemplateError(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match &self {
            AppError::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", msg),
                )
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg.clone())
            }
        };

        (status, message).into_response()
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::TemplateError(err.to_string())
    }
}
