//! Semantic tags for the third-party dependencies the demo pages call.

use std::time::Duration;

/// Which third-party concern a fetch belongs to.
///
/// Each tag carries a default time budget. None of them retries: a failed
/// call surfaces to the caller, which substitutes demo data or shows a
/// failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Current weather conditions.
    Weather,
    /// Multi-day weather forecast.
    Forecast,
    /// Transactional email delivery.
    Email,
    /// Anything else, by name.
    Custom(&'static str),
}

impl DependencyTag {
    pub fn name(&self) -> &str {
        match self {
            Self::Weather => "weather",
            Self::Forecast => "forecast",
            Self::Email => "email",
            Self::Custom(name) => name,
        }
    }

    /// Default total time budget for this dependency.
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(match self {
            // Weather endpoints are slow on a cold cache; give them room.
            Self::Weather => 1500,
            Self::Forecast => 2000,
            // Email submission blocks a form; keep the wait tolerable.
            Self::Email => 3000,
            Self::Custom(_) => 1000,
        })
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(DependencyTag::Weather.name(), "weather");
        assert_eq!(DependencyTag::Custom("pdf").name(), "pdf");
        assert_eq!(DependencyTag::Email.to_string(), "email");
    }

    #[test]
    fn email_gets_the_longest_budget() {
        assert!(DependencyTag::Email.time_budget() > DependencyTag::Forecast.time_budget());
        assert!(DependencyTag::Forecast.time_budget() > DependencyTag::Weather.time_budget());
    }
}
