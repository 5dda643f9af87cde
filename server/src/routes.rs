//! Route assembly

mod api;
pub mod ui;

use axum::Router;

use crate::state::AppState;

/// Create main router with all routes
pub fn app(state: AppState) -> Router {
    Router::new()
        // REST API routes
        .nest("/api", api_routes(state.clone()))
        // HTMX UI routes
        .merge(ui::ui_routes().with_state(state))
}

/// Create API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // REST API routes
        .nest("/v1", api::routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wxcardrs_core::WeatherCard;

    fn test_state() -> AppState {
        AppState::new(Config {
            cards: vec![WeatherCard::new("Berlin", 18.0, "rainy", "rain.svg")],
        })
    }

    async fn get(uri: &str) -> axum::response::Response {
        app(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/api/v1/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_contains_configured_card() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Berlin"));
        assert!(body.contains("18°C"));
    }

    #[tokio::test]
    async fn test_card_fragment_by_index() {
        let response = get("/cards/0").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains(r#"src="rain.svg""#));
    }

    #[tokio::test]
    async fn test_card_fragment_out_of_range() {
        let response = get("/cards/9").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_card_preview_with_partial_query() {
        let response = get("/cards/preview?city=Oslo").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Oslo"));
        // omitted temperature degrades to a bare unit suffix
        assert!(body.contains("°C"));
    }

    #[tokio::test]
    async fn test_api_lists_cards_as_json() {
        let response = get("/api/v1/cards").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains(r#""city":"Berlin""#));
    }

    #[tokio::test]
    async fn test_api_card_not_found() {
        let response = get("/api/v1/cards/9").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
