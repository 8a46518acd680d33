//! Forecast section.

use crate::data::Forecast;

/// Render the five-day forecast strip.
pub fn render_forecast(forecast: &Forecast) -> String {
    let days: String = forecast
        .days
        .iter()
        .map(|day| {
            format!(
                r#"        <div class="forecast-day">
            <span class="day-label">{label}</span>
            <span class="day-icon">{icon}</span>
            <span class="day-high">{high:.0}&deg;</span>
            <span class="day-low">{low:.0}&deg;</span>
        </div>
"#,
                label = day.label,
                icon = day.condition.icon(),
                high = day.high_c,
                low = day.low_c,
            )
        })
        .collect();

    format!(
        r#"<section class="weather-forecast" data-section="forecast">
    <h3>5-day forecast</h3>
    <div class="forecast-strip">
{days}    </div>
</section>"#
    )
}

/// Fallback when no forecast exists for the city.
pub fn render_forecast_unavailable() -> String {
    r#"<section class="weather-forecast weather-forecast--empty" data-section="forecast">
    <h3>5-day forecast</h3>
    <p>Forecast unavailable for this city.</p>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table_forecast;

    #[test]
    fn test_forecast_strip_has_five_days() {
        let forecast = table_forecast("Pune").unwrap();
        let html = render_forecast(&forecast);
        assert_eq!(html.matches("forecast-day").count(), 5);
    }
}
