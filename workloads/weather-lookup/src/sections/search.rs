//! Search section - city input, locate button, toast area.

use crate::data::{city_names, GeoError};

use super::html_escape;

/// Render the search form.
///
/// The locate button uses browser geolocation; its four failure codes map to
/// the toast messages inlined by `geolocation_script`.
pub fn render_search(current_city: &str) -> String {
    let options: String = city_names()
        .iter()
        .map(|city| format!(r#"<option value="{}">"#, city))
        .collect();

    format!(
        r#"<section class="weather-search" data-section="search">
    <form method="GET" action="/demos/weather">
        <input type="search" name="q" value="{city}" list="city-list"
               placeholder="Search a city" required aria-label="City">
        <datalist id="city-list">{options}</datalist>
        <button type="submit">Search</button>
        <button type="button" id="locate-btn">Use my location</button>
    </form>
    <div id="toast" class="toast" hidden></div>
    <script>{script}</script>
</section>"#,
        city = html_escape(current_city),
        options = options,
        script = geolocation_script(),
    )
}

/// Inline script wiring the locate button to the geolocation API.
///
/// Toast copy is generated from `GeoError` so the messages shown in the
/// browser and the ones asserted in tests cannot drift apart.
pub fn geolocation_script() -> String {
    format!(
        r#"(function() {{
  const btn = document.getElementById('locate-btn');
  const toast = document.getElementById('toast');
  const messages = {{
    0: "{unsupported}",
    1: "{denied}",
    2: "{unavailable}",
    3: "{timeout}"
  }};
  function showToast(text) {{
    toast.textContent = text;
    toast.hidden = false;
    setTimeout(() => {{ toast.hidden = true; }}, 4000);
  }}
  btn.addEventListener('click', () => {{
    if (!navigator.geolocation) {{ showToast(messages[0]); return; }}
    navigator.geolocation.getCurrentPosition(
      (pos) => {{
        const q = pos.coords.latitude.toFixed(2) + ',' + pos.coords.longitude.toFixed(2);
        window.location = '/demos/weather?q=' + encodeURIComponent(q);
      }},
      (err) => {{ showToast(messages[err.code] || messages[0]); }}
    );
  }});
}})();"#,
        unsupported = GeoError::Unsupported.toast_message(),
        denied = GeoError::PermissionDenied.toast_message(),
        unavailable = GeoError::PositionUnavailable.toast_message(),
        timeout = GeoError::Timeout.toast_message(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_prefills_city() {
        let html = render_search("Pune");
        assert!(html.contains(r#"value="Pune""#));
        assert!(html.contains("city-list"));
    }

    #[test]
    fn test_script_covers_all_geo_codes() {
        let script = geolocation_script();
        for err in [
            GeoError::Unsupported,
            GeoError::PermissionDenied,
            GeoError::PositionUnavailable,
            GeoError::Timeout,
        ] {
            assert!(script.contains(err.toast_message()));
        }
    }
}
