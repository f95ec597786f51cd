//! Core library for the `weather-gui` desktop app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider seam and its OpenWeather implementation
//! - Shared domain models (query, location, reading)
//! - The condition-code glyph table and the session search history
//! - A background worker that runs lookups off the UI thread
//!
//! It is used by `weather-gui`, but has no dependency on any UI toolkit.

pub mod config;
pub mod error;
pub mod glyph;
pub mod history;
pub mod model;
pub mod provider;
pub mod worker;

pub use config::Config;
pub use error::FetchError;
pub use glyph::{Condition, weather_glyph};
pub use history::SearchHistory;
pub use model::{Location, WeatherQuery, WeatherReading};
pub use provider::{UnconfiguredProvider, WeatherProvider, lookup, provider_from_config};
pub use worker::{FetchHandle, FetchOutcome, FetchWorker, Notifier};
