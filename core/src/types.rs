//! Shared types

use serde::{Deserialize, Serialize};

/// Weather card view-model
///
/// The four pre-resolved values a card renders. The rendering layer
/// appends the `°C` suffix and applies the capitalization styling;
/// none of the fields are mutated or validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherCard {
    /// City name shown as the card header
    pub city: String,
    /// Temperature in the desired unit (no conversion is performed)
    pub temperature: f64,
    /// Condition label (e.g. "cloudy"), stored verbatim
    pub condition: String,
    /// URL or path of the condition icon
    pub icon: String,
}

impl WeatherCard {
    /// Create a new weather card
    pub fn new(
        city: impl Into<String>,
        temperature: f64,
        condition: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            temperature,
            condition: condition.into(),
            icon: icon.into(),
        }
    }

    /// Get display string for card
    pub fn display(&self) -> String {
        format!("{} ({}°C, {})", self.city, self.temperature, self.condition)
    }
}
