//! Bundled weather-by-city table.
//!
//! The demo stays useful without an API key: lookups answer from this table,
//! and live fetch failures fall back to it as well. Values are plausible
//! seasonal numbers, not observations.

use super::{CurrentConditions, Forecast, ForecastDay, WeatherKind};

struct CityRow {
    city: &'static str,
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WeatherKind,
}

const CITY_TABLE: &[CityRow] = &[
    CityRow { city: "Mumbai", temp_c: 31.0, humidity: 74, wind_kph: 14.0, condition: WeatherKind::Haze },
    CityRow { city: "Delhi", temp_c: 34.0, humidity: 48, wind_kph: 10.0, condition: WeatherKind::Clear },
    CityRow { city: "Bengaluru", temp_c: 26.0, humidity: 62, wind_kph: 12.0, condition: WeatherKind::Clouds },
    CityRow { city: "Chennai", temp_c: 33.0, humidity: 70, wind_kph: 18.0, condition: WeatherKind::Clear },
    CityRow { city: "Kolkata", temp_c: 32.0, humidity: 78, wind_kph: 9.0, condition: WeatherKind::Thunderstorm },
    CityRow { city: "Hyderabad", temp_c: 30.0, humidity: 55, wind_kph: 11.0, condition: WeatherKind::Clouds },
    CityRow { city: "Pune", temp_c: 28.0, humidity: 58, wind_kph: 13.0, condition: WeatherKind::Clouds },
    CityRow { city: "Ahmedabad", temp_c: 35.0, humidity: 42, wind_kph: 12.0, condition: WeatherKind::Clear },
    CityRow { city: "Jaipur", temp_c: 33.0, humidity: 38, wind_kph: 15.0, condition: WeatherKind::Clear },
    CityRow { city: "Kochi", temp_c: 29.0, humidity: 83, wind_kph: 16.0, condition: WeatherKind::Rain },
    CityRow { city: "Goa", temp_c: 30.0, humidity: 79, wind_kph: 17.0, condition: WeatherKind::Rain },
    CityRow { city: "Shimla", temp_c: 18.0, humidity: 60, wind_kph: 8.0, condition: WeatherKind::Mist },
];

/// The demo's default city.
pub const DEFAULT_CITY: &str = "Mumbai";

/// City names for the search datalist, in table order.
pub fn city_names() -> Vec<&'static str> {
    CITY_TABLE.iter().map(|row| row.city).collect()
}

/// Look up current conditions from the table, case-insensitively.
pub fn table_conditions(city: &str) -> Option<CurrentConditions> {
    CITY_TABLE
        .iter()
        .find(|row| row.city.eq_ignore_ascii_case(city.trim()))
        .map(|row| CurrentConditions {
            city: row.city.to_string(),
            temp_c: row.temp_c,
            feels_like_c: feels_like(row.temp_c, row.humidity),
            humidity: row.humidity,
            wind_kph: row.wind_kph,
            condition: row.condition,
        })
}

/// Derive a five-day forecast from the table row: a gentle swing around the
/// current temperature so the chart has some shape.
pub fn table_forecast(city: &str) -> Option<Forecast> {
    const LABELS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    const SWING: [f64; 5] = [0.0, 1.0, 2.0, -1.0, -2.0];

    let row = CITY_TABLE
        .iter()
        .find(|row| row.city.eq_ignore_ascii_case(city.trim()))?;

    let days = LABELS
        .iter()
        .zip(SWING.iter())
        .map(|(label, delta)| ForecastDay {
            label: label.to_string(),
            high_c: row.temp_c + delta + 2.0,
            low_c: row.temp_c + delta - 4.0,
            condition: row.condition,
        })
        .collect();

    Some(Forecast {
        city: row.city.to_string(),
        days,
    })
}

/// Muggy air reads warmer, dry air slightly cooler.
fn feels_like(temp_c: f64, humidity: u8) -> f64 {
    if humidity > 70 {
        temp_c + 2.0
    } else if humidity < 45 {
        temp_c - 1.0
    } else {
        temp_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let conditions = table_conditions("bengaluru").unwrap();
        assert_eq!(conditions.city, "Bengaluru");
        assert_eq!(conditions.temp_c, 26.0);
    }

    #[test]
    fn test_unknown_city_misses() {
        assert!(table_conditions("Atlantis").is_none());
        assert!(table_forecast("Atlantis").is_none());
    }

    #[test]
    fn test_default_city_present() {
        assert!(table_conditions(DEFAULT_CITY).is_some());
    }

    #[test]
    fn test_table_forecast_shape() {
        let forecast = table_forecast("Kochi").unwrap();
        assert_eq!(forecast.days.len(), 5);
        for day in &forecast.days {
            assert!(day.high_c > day.low_c);
        }
    }

    #[test]
    fn test_humid_city_feels_warmer() {
        let kochi = table_conditions("Kochi").unwrap();
        assert!(kochi.feels_like_c > kochi.temp_c);

        let jaipur = table_conditions("Jaipur").unwrap();
        assert!(jaipur.feels_like_c < jaipur.temp_c);
    }
}
