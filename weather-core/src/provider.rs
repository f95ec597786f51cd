use crate::{
    Config, FetchError, Location, WeatherQuery, WeatherReading,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// The two calls a lookup needs from a weather service.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a city to coordinates. `Ok(None)` means the service knows no such place.
    async fn geocode(&self, query: &WeatherQuery) -> anyhow::Result<Option<Location>>;

    async fn current_weather(&self, location: &Location) -> anyhow::Result<WeatherReading>;
}

/// Geocode `query`, then fetch current conditions for the first match.
///
/// The weather call is only made once a location has been found.
pub async fn lookup(
    provider: &dyn WeatherProvider,
    query: &WeatherQuery,
) -> Result<WeatherReading, FetchError> {
    let location = provider.geocode(query).await?.ok_or(FetchError::LocationNotFound)?;

    tracing::debug!(
        city = %query.city,
        lat = location.latitude,
        lon = location.longitude,
        country = location.country.as_deref().unwrap_or("-"),
        "geocoded"
    );

    let reading = provider.current_weather(&location).await?;
    Ok(reading)
}

/// Stand-in used when no API key is configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl WeatherProvider for UnconfiguredProvider {
    async fn geocode(&self, _query: &WeatherQuery) -> anyhow::Result<Option<Location>> {
        Err(missing_key_error())
    }

    async fn current_weather(&self, _location: &Location) -> anyhow::Result<WeatherReading> {
        Err(missing_key_error())
    }
}

fn missing_key_error() -> anyhow::Error {
    anyhow::anyhow!(
        "No API key configured.\n\
         Hint: set `{}` in the environment or in a `.env` file.",
        crate::config::API_KEY_ENV
    )
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(missing_key_error)?;
    let provider = OpenWeatherProvider::from_config(api_key.to_owned(), config)?;
    Ok(Arc::new(provider))
}
