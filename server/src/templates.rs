//! Askama templates for HTMX UI

use askama::Template;
use serde::{Deserialize, Serialize};
use wxcardrs_core::WeatherCard;

// ============================================================================
// Display Models
// ============================================================================

/// Card fields pre-formatted for rendering
///
/// The temperature is formatted up front; an absent value renders as an
/// empty readout. The condition keeps its stored casing; capitalization
/// is done by a styling class in the markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDisplay {
    pub city: String,
    pub temperature: String,
    pub condition: String,
    pub icon: String,
}

impl From<WeatherCard> for CardDisplay {
    fn from(card: WeatherCard) -> Self {
        Self {
            city: card.city,
            temperature: card.temperature.to_string(),
            condition: card.condition,
            icon: card.icon,
        }
    }
}

// ============================================================================
// Weather Card
// ============================================================================

/// Standalone weather card fragment (HTMX partial)
#[derive(Template)]
#[template(path = "components/weather_card.html")]
pub struct WeatherCardTemplate {
    pub card: CardDisplay,
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub cards: Vec<CardDisplay>,
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate;

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin() -> CardDisplay {
        CardDisplay::from(WeatherCard::new("Berlin", 18.0, "rainy", "rain.svg"))
    }

    #[test]
    fn test_card_renders_all_four_fields() {
        let html = WeatherCardTemplate { card: berlin() }.render().unwrap();

        assert!(html.contains("Berlin"));
        assert!(html.contains(r#"src="rain.svg""#));
        assert!(html.contains("18°C"));
        assert!(html.contains("rainy"));
    }

    #[test]
    fn test_temperature_readout_is_value_then_unit() {
        let card = CardDisplay::from(WeatherCard::new("Oslo", 22.0, "cloudy", "clouds.svg"));
        let html = WeatherCardTemplate { card }.render().unwrap();

        assert!(html.contains("22°C"));
    }

    #[test]
    fn test_condition_is_capitalized_by_style_only() {
        let html = WeatherCardTemplate { card: berlin() }.render().unwrap();

        // The markup keeps the stored lowercase string; only the class
        // changes what is shown on screen.
        assert!(html.contains(">rainy<"));
        assert!(!html.contains("Rainy"));
        assert!(html.contains(r#"class="capitalize mt-2""#));
    }

    #[test]
    fn test_icon_src_matches_input_exactly() {
        let card = CardDisplay::from(WeatherCard::new(
            "Lisbon",
            24.0,
            "sunny",
            "https://example.com/sun.svg",
        ));
        let html = WeatherCardTemplate { card }.render().unwrap();

        assert!(html.contains(r#"src="https://example.com/sun.svg""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = WeatherCardTemplate { card: berlin() }.render().unwrap();
        let second = WeatherCardTemplate { card: berlin() }.render().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_fields_render_empty_not_error() {
        let card = CardDisplay {
            city: String::new(),
            temperature: String::new(),
            condition: String::new(),
            icon: String::new(),
        };
        let html = WeatherCardTemplate { card }.render().unwrap();

        // Degraded output: blank labels and a bare unit suffix.
        assert!(html.contains("°C"));
    }

    #[test]
    fn test_dashboard_lists_every_card() {
        let cards = vec![
            berlin(),
            CardDisplay::from(WeatherCard::new("Lisbon", 24.0, "sunny", "sun.svg")),
        ];
        let html = DashboardTemplate { cards }.render().unwrap();

        assert!(html.contains("Berlin"));
        assert!(html.contains("Lisbon"));
    }

    #[test]
    fn test_not_found_renders() {
        let html = NotFoundTemplate.render().unwrap();
        assert!(html.contains("404"));
    }
}
