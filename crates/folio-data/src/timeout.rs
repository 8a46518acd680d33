//! Time budgets for outbound fetches.

use std::time::Duration;

/// Connect/total budgets for one fetch.
///
/// The default is the client-wide ceiling; per-dependency budgets from
/// [`crate::DependencyTag`] are capped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub total: Duration,
}

impl TimeoutConfig {
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self {
            connect: connect.min(total),
            total,
        }
    }

    /// Split a total budget into connect/total, giving the handshake a
    /// quarter of the budget.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: total / 4,
            total,
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_millis(500),
            total: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_total_gives_handshake_a_quarter() {
        let budget = TimeoutConfig::from_total(Duration::from_millis(2000));
        assert_eq!(budget.connect, Duration::from_millis(500));
        assert_eq!(budget.total, Duration::from_millis(2000));
    }

    #[test]
    fn connect_never_exceeds_total() {
        let budget = TimeoutConfig::new(Duration::from_secs(9), Duration::from_secs(1));
        assert_eq!(budget.connect, Duration::from_secs(1));
    }
}
