//! Configuration management

use serde::{Deserialize, Serialize};
use wxcardrs_core::{Error, Result, WeatherCard};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cards shown on the dashboard
    pub cards: Vec<WeatherCard>,
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        let cards = if let Ok(card_str) = std::env::var("CARDS") {
            Self::parse_cards(&card_str)?
        } else {
            Self::sample_cards()
        };

        Ok(Config { cards })
    }

    /// Parse card list from string
    ///
    /// Format: `city|temperature|condition|icon`, comma separated.
    fn parse_cards(input: &str) -> Result<Vec<WeatherCard>> {
        input
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                let parts: Vec<&str> = s.split('|').collect();
                match parts.as_slice() {
                    [city, temperature, condition, icon] => {
                        let temperature = temperature.trim().parse::<f64>().map_err(|_| {
                            Error::ConfigError(format!("Invalid temperature: {}", temperature))
                        })?;
                        Ok(WeatherCard::new(*city, temperature, *condition, *icon))
                    }
                    _ => Err(Error::ConfigError(format!("Invalid card format: {}", s))),
                }
            })
            .collect()
    }

    /// Built-in cards used when nothing is configured
    fn sample_cards() -> Vec<WeatherCard> {
        vec![
            WeatherCard::new("Berlin", 18.0, "rainy", "/static/icons/rain.svg"),
            WeatherCard::new("Lisbon", 24.0, "sunny", "/static/icons/sun.svg"),
            WeatherCard::new("Oslo", 7.0, "cloudy", "/static/icons/clouds.svg"),
        ]
    }
}
