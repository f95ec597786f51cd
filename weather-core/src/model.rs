use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A city lookup as submitted by the user, scoped to one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub country_code: String,
}

impl WeatherQuery {
    /// Build a query from raw user input. Returns `None` when the input is blank.
    pub fn new(city: &str, country_code: &str) -> Option<Self> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        Some(Self {
            city: city.to_string(),
            country_code: country_code.trim().to_string(),
        })
    }

    /// The `q` parameter sent to the geocoder, e.g. `"Pune,IN"`.
    pub fn geocode_term(&self) -> String {
        if self.country_code.is_empty() {
            self.city.clone()
        } else {
            format!("{},{}", self.city, self.country_code)
        }
    }
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: Option<String>,
}

/// Current conditions for a resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition_code: i32,
    pub description: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    pub fn temperature_text(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }

    pub fn summary_text(&self) -> String {
        format!("{} • {}", self.location_name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_city_is_rejected() {
        assert_eq!(WeatherQuery::new("   ", "IN"), None);
        assert_eq!(WeatherQuery::new("", "IN"), None);
    }

    #[test]
    fn city_is_trimmed_and_qualified() {
        let query = WeatherQuery::new("  Pune ", "IN").expect("query");
        assert_eq!(query.city, "Pune");
        assert_eq!(query.geocode_term(), "Pune,IN");
    }

    #[test]
    fn empty_country_leaves_term_unqualified() {
        let query = WeatherQuery::new("London", "").expect("query");
        assert_eq!(query.geocode_term(), "London");
    }

    #[test]
    fn reading_formats_labels() {
        let reading = WeatherReading {
            location_name: "London".into(),
            temperature_c: 15.3,
            condition_code: 800,
            description: "clear sky".into(),
            observed_at: Utc::now(),
        };

        assert_eq!(reading.temperature_text(), "15.3°C");
        assert_eq!(reading.summary_text(), "London • clear sky");
    }

    #[test]
    fn temperature_rounds_to_one_decimal() {
        let reading = WeatherReading {
            location_name: "Leh".into(),
            temperature_c: -3.26,
            condition_code: 600,
            description: "snow".into(),
            observed_at: Utc::now(),
        };

        assert_eq!(reading.temperature_text(), "-3.3°C");
    }
}
