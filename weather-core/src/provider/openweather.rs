use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config,
    model::{Location, WeatherQuery, WeatherReading},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    geocoding_base_url: String,
    weather_base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Build a provider using the endpoints and request timeout from `config`.
    pub fn from_config(api_key: String, config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            geocoding_base_url: trim_base(&config.geocoding_base_url),
            weather_base_url: trim_base(&config.weather_base_url),
            http,
        })
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)], what: &str) -> Result<String> {
        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeocodeEntry {
    #[serde(default)]
    name: Option<String>,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn geocode(&self, query: &WeatherQuery) -> Result<Option<Location>> {
        let url = format!("{}/geo/1.0/direct", self.geocoding_base_url);
        let term = query.geocode_term();

        tracing::debug!(%url, q = %term, "geocoding");

        let body = self
            .get_json(&url, &[("q", term.as_str()), ("limit", "1")], "geocoding")
            .await?;

        let parsed: Vec<OwGeocodeEntry> =
            serde_json::from_str(&body).context("Failed to parse OpenWeather geocoding JSON")?;

        Ok(parsed.into_iter().next().map(|entry| Location {
            latitude: entry.lat,
            longitude: entry.lon,
            name: entry.name.unwrap_or_else(|| query.city.clone()),
            country: entry.country,
        }))
    }

    async fn current_weather(&self, location: &Location) -> Result<WeatherReading> {
        let url = format!("{}/data/2.5/weather", self.weather_base_url);
        let lat = location.latitude.to_string();
        let lon = location.longitude.to_string();

        tracing::debug!(%url, %lat, %lon, "fetching current weather");

        let body = self
            .get_json(
                &url,
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")],
                "current weather",
            )
            .await?;

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenWeather current response contained no conditions"))?;

        let location_name = if parsed.name.is_empty() {
            location.name.clone()
        } else {
            parsed.name
        };

        let observed_at = parsed.dt.and_then(unix_to_utc).unwrap_or_else(Utc::now);

        Ok(WeatherReading {
            location_name,
            temperature_c: parsed.main.temp,
            condition_code: condition.id,
            description: condition.description,
            observed_at,
        })
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
