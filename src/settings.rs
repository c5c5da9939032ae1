//! Probe configuration.

use std::time::Duration;

use mms_client::DEFAULT_ENDPOINT;

/// `~:`, the threshold that never alarms.
pub const DEFAULT_THRESHOLD: &str = "~:";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How old the latest metric point may be before it counts as stale.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(180);

/// Everything one probe invocation needs to know.
///
/// Without a metric name the probe checks how long ago the host last
/// pinged; with one it checks that metric's latest reading.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    pub server_url: String,
    pub group_id: String,
    /// `hostname:port` of the mongod / mongos.
    pub hostname: String,
    pub metric: Option<String>,
    pub warning: String,
    pub critical: String,
    pub timeout: Duration,
    pub max_age: Duration,
}

impl CheckConfig {
    /// A connectivity check with default thresholds.
    pub fn new(
        server_url: impl Into<String>,
        group_id: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            group_id: group_id.into(),
            hostname: hostname.into(),
            metric: None,
            warning: DEFAULT_THRESHOLD.to_string(),
            critical: DEFAULT_THRESHOLD.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_age: DEFAULT_MAX_AGE,
        }
    }

    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    pub fn with_thresholds(mut self, warning: impl Into<String>, critical: impl Into<String>) -> Self {
        self.warning = warning.into();
        self.critical = critical.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, "", "")
    }
}
