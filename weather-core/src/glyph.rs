//! Mapping from OpenWeather condition codes to display glyphs.
//!
//! See <https://openweathermap.org/weather-conditions> for the code table.

/// Condition groups as defined by the provider's code ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    VolcanicAsh,
    Squall,
    Tornado,
    Clear,
    Clouds,
}

impl Condition {
    /// Classify a provider code. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        let condition = match code {
            200..=232 => Self::Thunderstorm,
            300..=321 => Self::Drizzle,
            500..=531 => Self::Rain,
            600..=622 => Self::Snow,
            701..=741 => Self::Atmosphere,
            762 => Self::VolcanicAsh,
            771 => Self::Squall,
            781 => Self::Tornado,
            800 => Self::Clear,
            801..=804 => Self::Clouds,
            _ => return None,
        };
        Some(condition)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Thunderstorm => "🌩️",
            Self::Drizzle => "☁️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Atmosphere => "🌫️",
            Self::VolcanicAsh => "🌋",
            Self::Squall | Self::Tornado => "🌪️",
            Self::Clear => "☀️",
            // text presentation selector, renders as a plain outline cloud
            Self::Clouds => "☁\u{FE0E}",
        }
    }
}

/// Glyph for a provider condition code, or `""` when the code is not in any known range.
pub fn weather_glyph(code: i32) -> &'static str {
    Condition::from_code(code).map_or("", Condition::glyph)
}
