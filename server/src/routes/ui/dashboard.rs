//! Dashboard page routes

use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};

use super::AppError;
use crate::state::AppState;
use crate::templates::{CardDisplay, DashboardTemplate};

/// Create dashboard router
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_page))
}

/// Dashboard page handler
async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let cards: Vec<CardDisplay> = state
        .config
        .cards
        .iter()
        .cloned()
        .map(Into::into)
        .collect();

    let template = DashboardTemplate { cards };
    Ok(Html(template.render()?))
}
