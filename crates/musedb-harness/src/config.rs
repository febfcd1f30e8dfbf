//! Harness configuration.

use std::time::Duration;

/// Default wait window for a single workflow step.
const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default interval between polls inside a wait window.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Bounded-wait settings for workflow steps.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// How long a step may poll before it fails.
    pub wait_timeout: Duration,
    /// Sleep between polls.
    pub poll_interval: Duration,
}

impl HarnessConfig {
    /// Create a config with the default 10-second wait window.
    pub fn new() -> Self {
        Self {
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the wait window.
    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::new();
        assert_eq!(config.wait_timeout, Duration::from_secs(10));
        assert_eq!(config.poll_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_builders() {
        let config = HarnessConfig::new()
            .with_wait_timeout(Duration::from_millis(250))
            .with_poll_interval(Duration::from_millis(10));

        assert_eq!(config.wait_timeout, Duration::from_millis(250));
        assert_eq!(config.poll_interval, Duration::from_millis(10));
    }
}
