//! Weather domain models and provider response shapes.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Coarse weather condition buckets, shared by live and fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherKind {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Mist,
    Haze,
}

impl WeatherKind {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::Clouds => "Cloudy",
            WeatherKind::Rain => "Rain",
            WeatherKind::Thunderstorm => "Thunderstorm",
            WeatherKind::Mist => "Mist",
            WeatherKind::Haze => "Haze",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "\u{2600}",
            WeatherKind::Clouds => "\u{2601}",
            WeatherKind::Rain => "\u{1f327}",
            WeatherKind::Thunderstorm => "\u{26c8}",
            WeatherKind::Mist => "\u{1f32b}",
            WeatherKind::Haze => "\u{1f324}",
        }
    }

    /// Map a provider condition string into a bucket. Unknown strings read
    /// as haze, which is rarely wrong for Indian skies.
    pub fn from_provider(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "clear" => WeatherKind::Clear,
            "clouds" => WeatherKind::Clouds,
            "rain" | "drizzle" => WeatherKind::Rain,
            "thunderstorm" => WeatherKind::Thunderstorm,
            "mist" | "fog" => WeatherKind::Mist,
            _ => WeatherKind::Haze,
        }
    }
}

/// Current conditions for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    /// Relative humidity percentage.
    pub humidity: u8,
    pub wind_kph: f64,
    pub condition: WeatherKind,
}

/// One day of the forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short display label ("Mon", "Tue", ...).
    pub label: String,
    pub high_c: f64,
    pub low_c: f64,
    pub condition: WeatherKind,
}

/// Five-day forecast for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub city: String,
    pub days: Vec<ForecastDay>,
}

/// Browser geolocation failure, one variant per browser error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoError {
    /// Geolocation API not available at all.
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl GeoError {
    /// The numeric code the browser reports (0 is our "unsupported" marker).
    pub fn code(&self) -> u8 {
        match self {
            GeoError::Unsupported => 0,
            GeoError::PermissionDenied => 1,
            GeoError::PositionUnavailable => 2,
            GeoError::Timeout => 3,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => GeoError::PermissionDenied,
            2 => GeoError::PositionUnavailable,
            3 => GeoError::Timeout,
            _ => GeoError::Unsupported,
        }
    }

    /// User-facing toast text.
    pub fn toast_message(&self) -> &'static str {
        match self {
            GeoError::Unsupported => "Your browser does not support location lookup.",
            GeoError::PermissionDenied => "Location permission was denied. Search by city instead.",
            GeoError::PositionUnavailable => "Could not determine your location. Search by city instead.",
            GeoError::Timeout => "Location lookup timed out. Try again or search by city.",
        }
    }
}

// Provider response shapes (OpenWeatherMap-compatible).

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCurrent {
    pub name: String,
    pub main: ProviderMain,
    pub wind: ProviderWind,
    pub weather: Vec<ProviderCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderWind {
    /// Metres per second.
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCondition {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderForecast {
    pub city: ProviderCity,
    pub list: Vec<ProviderForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCity {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderForecastEntry {
    /// Unix timestamp of the slot.
    pub dt: i64,
    pub main: ProviderForecastMain,
    pub weather: Vec<ProviderCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderForecastMain {
    pub temp_max: f64,
    pub temp_min: f64,
}

impl ProviderCurrent {
    /// Convert the provider payload into our model (metric units assumed).
    pub fn into_conditions(self) -> CurrentConditions {
        let condition = self
            .weather
            .first()
            .map(|c| WeatherKind::from_provider(&c.main))
            .unwrap_or(WeatherKind::Haze);

        CurrentConditions {
            city: self.name,
            temp_c: round1(self.main.temp),
            feels_like_c: round1(self.main.feels_like),
            humidity: self.main.humidity,
            wind_kph: round1(self.wind.speed * 3.6),
            condition,
        }
    }
}

impl ProviderForecast {
    /// Collapse the provider's 3-hourly list into five days, one sample per
    /// day (every 8th slot).
    pub fn into_forecast(self) -> Forecast {
        let days = self
            .list
            .iter()
            .step_by(8)
            .take(5)
            .map(|entry| {
                let condition = entry
                    .weather
                    .first()
                    .map(|c| WeatherKind::from_provider(&c.main))
                    .unwrap_or(WeatherKind::Haze);
                ForecastDay {
                    label: weekday_label(entry.dt),
                    high_c: round1(entry.main.temp_max),
                    low_c: round1(entry.main.temp_min),
                    condition,
                }
            })
            .collect();

        Forecast {
            city: self.city.name,
            days,
        }
    }
}

fn weekday_label(unix: i64) -> String {
    DateTime::from_timestamp(unix, 0)
        .map(|dt| dt.format("%a").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_error_codes_round_trip() {
        for err in [
            GeoError::Unsupported,
            GeoError::PermissionDenied,
            GeoError::PositionUnavailable,
            GeoError::Timeout,
        ] {
            assert_eq!(GeoError::from_code(err.code()), err);
        }
        // Unknown codes collapse to unsupported.
        assert_eq!(GeoError::from_code(42), GeoError::Unsupported);
    }

    #[test]
    fn test_provider_current_conversion() {
        let payload: ProviderCurrent = serde_json::from_str(
            r#"{
                "name": "Pune",
                "main": {"temp": 27.34, "feels_like": 29.01, "humidity": 64},
                "wind": {"speed": 3.5},
                "weather": [{"main": "Clouds"}]
            }"#,
        )
        .unwrap();

        let conditions = payload.into_conditions();
        assert_eq!(conditions.city, "Pune");
        assert_eq!(conditions.temp_c, 27.3);
        assert_eq!(conditions.wind_kph, 12.6);
        assert_eq!(conditions.condition, WeatherKind::Clouds);
    }

    #[test]
    fn test_forecast_samples_one_slot_per_day() {
        let entries: Vec<ProviderForecastEntry> = (0..40)
            .map(|i| ProviderForecastEntry {
                dt: 1_700_000_000 + i * 10_800,
                main: ProviderForecastMain {
                    temp_max: 30.0,
                    temp_min: 22.0,
                },
                weather: vec![ProviderCondition {
                    main: "Clear".to_string(),
                }],
            })
            .collect();

        let forecast = ProviderForecast {
            city: ProviderCity {
                name: "Kochi".to_string(),
            },
            list: entries,
        }
        .into_forecast();

        assert_eq!(forecast.days.len(), 5);
        assert!(forecast.days.iter().all(|d| d.condition == WeatherKind::Clear));
    }

    #[test]
    fn test_unknown_condition_becomes_haze() {
        assert_eq!(WeatherKind::from_provider("Sandstorm"), WeatherKind::Haze);
    }
}
