//! Demo page manifests.

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;

/// Declares one demo page: its name, version and the routes it answers.
/// The manifest feeds the page's logger and metrics identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    pub name: String,
    pub version: String,
    pub routes: Vec<RouteConfig>,
}

impl WorkloadManifest {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Whether any declared route matches the given path exactly.
    pub fn handles(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.pattern == path)
    }
}

/// Errors surfaced while streaming a demo page.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("shell must be sent before any section")]
    ShellNotSent,

    #[error("response stream failed: {0}")]
    StreamError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_collects_routes() {
        let manifest = WorkloadManifest::new("weather-lookup", "0.1.0")
            .with_route(RouteConfig::new("/demos/weather", "handle"))
            .with_route(
                RouteConfig::new("/demos/weather/forecast", "handle")
                    .with_methods(vec!["GET", "POST"]),
            );

        assert_eq!(manifest.routes.len(), 2);
        assert_eq!(manifest.routes[1].methods, vec!["GET", "POST"]);
        assert!(manifest.handles("/demos/weather"));
        assert!(!manifest.handles("/demos/shop"));
    }
}
