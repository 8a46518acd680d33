//! Current conditions section.

use crate::data::CurrentConditions;

use super::html_escape;

/// Render current conditions for the selected city.
pub fn render_current(conditions: &CurrentConditions, from_table: bool) -> String {
    let source = if from_table {
        r#"<p class="data-source">Demo data - add an API key for live weather.</p>"#
    } else {
        ""
    };

    format!(
        r#"<section class="weather-current" data-section="current">
    <h2>{icon} {city}</h2>
    <p class="temp-main">{temp:.0}&deg;C</p>
    <p class="temp-detail">Feels like {feels:.0}&deg;C &middot; {label}</p>
    <dl class="conditions">
        <dt>Humidity</dt><dd>{humidity}%</dd>
        <dt>Wind</dt><dd>{wind:.0} km/h</dd>
    </dl>
    {source}
</section>"#,
        icon = conditions.condition.icon(),
        city = html_escape(&conditions.city),
        temp = conditions.temp_c,
        feels = conditions.feels_like_c,
        label = conditions.condition.label(),
        humidity = conditions.humidity,
        wind = conditions.wind_kph,
        source = source,
    )
}

/// Fallback when the city is unknown to both the provider and the table.
pub fn render_current_unknown(city: &str) -> String {
    format!(
        r#"<section class="weather-current weather-current--unknown" data-section="current">
    <h2>{}</h2>
    <p>No weather data for this city. Try one from the suggestions.</p>
</section>"#,
        html_escape(city)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table_conditions;

    #[test]
    fn test_current_renders_table_notice() {
        let conditions = table_conditions("Mumbai").unwrap();
        let html = render_current(&conditions, true);
        assert!(html.contains("Mumbai"));
        assert!(html.contains("Demo data"));
        assert!(html.contains("31&deg;C"));
    }

    #[test]
    fn test_live_data_has_no_notice() {
        let conditions = table_conditions("Delhi").unwrap();
        let html = render_current(&conditions, false);
        assert!(!html.contains("Demo data"));
    }
}
