//! Weather card fragment routes
//!
//! HTMX partials: one for a configured card by index, one rebuilding a
//! card from the preview form's query string on every input change.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use super::AppError;
use crate::state::AppState;
use crate::templates::{CardDisplay, WeatherCardTemplate};

/// Create card fragment router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cards/preview", get(card_preview))
        .route("/cards/{idx}", get(card_fragment))
}

/// Raw preview inputs
///
/// Every field is optional and passed through untouched; absent fields
/// render as empty instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    pub city: Option<String>,
    pub temperature: Option<String>,
    pub condition: Option<String>,
    pub icon: Option<String>,
}

impl From<CardQuery> for CardDisplay {
    fn from(query: CardQuery) -> Self {
        Self {
            city: query.city.unwrap_or_default(),
            temperature: query.temperature.unwrap_or_default(),
            condition: query.condition.unwrap_or_default(),
            icon: query.icon.unwrap_or_default(),
        }
    }
}

/// Render one configured card
async fn card_fragment(
    State(state): State<AppState>,
    Path(idx): Path<usize>,
) -> Result<Html<String>, AppError> {
    let card = state
        .config
        .cards
        .get(idx)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No card at index {}", idx)))?;

    let template = WeatherCardTemplate { card: card.into() };
    Ok(Html(template.render()?))
}

/// Render a card straight from the query string
async fn card_preview(Query(query): Query<CardQuery>) -> Result<Html<String>, AppError> {
    let template = WeatherCardTemplate { card: query.into() };
    Ok(Html(template.render()?))
}
