//! Site and provider configuration.
//!
//! Everything a page needs from the outside world is injected through these
//! types. In particular the weather API key is explicit configuration, never
//! ambient global state read from wherever it happens to live.

use serde::{Deserialize, Serialize};

/// Configuration for the weather provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Provider API key. `None` selects the bundled static city table.
    pub api_key: Option<String>,
    /// Provider base URL.
    pub base_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
        }
    }
}

impl WeatherConfig {
    /// Create a config with an API key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Whether live lookups are possible.
    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Configuration for the transactional email provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Provider submission endpoint.
    pub endpoint: String,
    /// Provider access key.
    pub access_key: String,
    /// Destination address for contact and inquiry mail.
    pub to_address: String,
}

impl EmailConfig {
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        to_address: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            to_address: to_address.into(),
        }
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site name.
    pub name: String,
    /// Default page title.
    pub default_title: String,
    /// CSS file path.
    pub css_path: Option<String>,
    /// Weather provider configuration.
    pub weather: WeatherConfig,
    /// Email provider configuration, when contact delivery is wired up.
    pub email: Option<EmailConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "folio".to_string(),
            default_title: "Arjun Mehta - Portfolio".to_string(),
            css_path: None,
            weather: WeatherConfig::default(),
            email: None,
        }
    }
}

impl SiteConfig {
    /// Create a new configuration with the given site name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    /// Inject the weather provider configuration.
    pub fn with_weather(mut self, weather: WeatherConfig) -> Self {
        self.weather = weather;
        self
    }

    /// Inject the email provider configuration.
    pub fn with_email(mut self, email: EmailConfig) -> Self {
        self.email = Some(email);
        self
    }
}

/// Configuration for a single route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/demos/weather").
    pub pattern: String,
    /// Handler function name.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_builder() {
        let config = SiteConfig::new("folio")
            .with_title("Portfolio")
            .with_css("/pkg/folio.css")
            .with_weather(WeatherConfig::with_key("k-123"));

        assert_eq!(config.name, "folio");
        assert_eq!(config.default_title, "Portfolio");
        assert_eq!(config.css_path, Some("/pkg/folio.css".to_string()));
        assert!(config.weather.has_key());
        assert!(config.email.is_none());
    }

    #[test]
    fn test_weather_config_defaults_to_table() {
        let weather = WeatherConfig::default();
        assert!(!weather.has_key());
        assert!(weather.base_url.starts_with("https://"));
    }
}
