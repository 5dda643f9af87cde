//! Core library for WxCardRS
//!
//! This crate defines the shared view-model types and errors
//! used across all WxCardRS components.

pub mod error;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::WeatherCard;
