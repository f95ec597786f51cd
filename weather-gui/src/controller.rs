//! UI-side state machine: input text, in-flight lookup, history and the
//! label contents. Kept free of egui so it can be driven from tests.

use weather_core::{
    FetchHandle, FetchWorker, SearchHistory, WeatherQuery, WeatherReading, weather_glyph,
};

use crate::action::Action;

pub(crate) const EMPTY_INPUT_MESSAGE: &str = "Please enter a location";
pub(crate) const FETCHING_MESSAGE: &str = "Fetching weather...";

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    None,
    Reading(WeatherReading),
    Error(String),
}

/// Text for the output labels, derived from the controller each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeatherLabels {
    pub(crate) temperature: String,
    pub(crate) glyph: &'static str,
    pub(crate) description: String,
    pub(crate) observed_at: Option<String>,
    pub(crate) status: &'static str,
    /// The temperature label holds an error message rather than a reading.
    pub(crate) is_error: bool,
}

#[derive(Debug)]
pub(crate) struct WeatherController {
    worker: FetchWorker,
    country_code: String,
    pub(crate) input: String,
    history: SearchHistory,
    outcome: Outcome,
    in_flight: Option<FetchHandle>,
}

impl WeatherController {
    pub(crate) fn new(worker: FetchWorker, country_code: impl Into<String>) -> Self {
        Self {
            worker,
            country_code: country_code.into(),
            input: String::new(),
            history: SearchHistory::new(),
            outcome: Outcome::None,
            in_flight: None,
        }
    }

    pub(crate) fn handle(&mut self, action: Action) {
        match action {
            Action::Submit => self.submit(),
            Action::SelectHistory(city) => self.select_history(city),
        }
    }

    /// Start a lookup for the current input. A lookup already in flight is cancelled.
    pub(crate) fn submit(&mut self) {
        let Some(query) = WeatherQuery::new(&self.input, &self.country_code) else {
            self.cancel_in_flight();
            self.outcome = Outcome::Error(EMPTY_INPUT_MESSAGE.to_string());
            return;
        };

        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(
                superseded_id = previous.id(),
                superseded = %previous.query().city,
                next = %query.city,
                "new lookup replaces the one in flight"
            );
        }
        self.in_flight = Some(self.worker.spawn(query));
    }

    pub(crate) fn select_history(&mut self, city: String) {
        if city.is_empty() {
            return;
        }
        self.input = city;
        self.submit();
    }

    /// Collect the outcome of the in-flight lookup, if it has finished.
    /// Returns `true` when the labels changed.
    pub(crate) fn poll(&mut self) -> bool {
        let Some(mut handle) = self.in_flight.take() else {
            return false;
        };
        let Some(outcome) = handle.poll() else {
            self.in_flight = Some(handle);
            return false;
        };

        match outcome {
            Ok(reading) => {
                let city = &handle.query().city;
                if self.history.record(city) {
                    tracing::debug!(%city, entries = self.history.len(), "added to history");
                }
                self.outcome = Outcome::Reading(reading);
            }
            Err(err) => {
                self.outcome = Outcome::Error(err.to_string());
            }
        }
        true
    }

    pub(crate) fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub(crate) fn labels(&self) -> WeatherLabels {
        let status = if self.is_fetching() { FETCHING_MESSAGE } else { "" };

        match &self.outcome {
            Outcome::None => WeatherLabels {
                temperature: String::new(),
                glyph: "",
                description: String::new(),
                observed_at: None,
                status,
                is_error: false,
            },
            Outcome::Reading(reading) => WeatherLabels {
                temperature: reading.temperature_text(),
                glyph: weather_glyph(reading.condition_code),
                description: reading.summary_text(),
                observed_at: Some(reading.observed_at.format("%Y-%m-%d %H:%M UTC").to_string()),
                status,
                is_error: false,
            },
            Outcome::Error(message) => WeatherLabels {
                temperature: message.clone(),
                glyph: "",
                description: String::new(),
                observed_at: None,
                status,
                is_error: true,
            },
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.cancel();
        }
    }
}
