//! Check outcome and its plugin-output rendering.

use std::fmt;

/// Service state in the Nagios plugin convention: `OK`, `WARNING`,
/// `CRITICAL` or `UNKNOWN`, exiting with 0 to 3.
pub use nagiosplugin::ServiceState as CheckStatus;

/// A labelled value attached to the output for graphing.
///
/// Rendered bare as `label=value`, with no unit or `;warn;crit` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfDatum {
    pub label: String,
    pub value: f64,
}

impl PerfDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl fmt::Display for PerfDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.value)
    }
}

/// The single outcome of one probe invocation.
///
/// Renders as `STATUS: message` plus ` | label=value` when a performance
/// datum was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    status: CheckStatus,
    message: String,
    perf_datum: Option<PerfDatum>,
}

impl CheckResult {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            perf_datum: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Unknown, message)
    }

    /// Attach a performance datum.
    pub fn with_perf_datum(mut self, datum: PerfDatum) -> Self {
        self.perf_datum = Some(datum);
        self
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn perf_datum(&self) -> Option<&PerfDatum> {
        self.perf_datum.as_ref()
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)?;
        if let Some(datum) = &self.perf_datum {
            write!(f, " | {}", datum)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(CheckStatus::Ok.to_string(), "OK");
        assert_eq!(CheckStatus::Warning.to_string(), "WARNING");
        assert_eq!(CheckStatus::Critical.to_string(), "CRITICAL");
        assert_eq!(CheckStatus::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckStatus::Ok.exit_code(), 0);
        assert_eq!(CheckStatus::Warning.exit_code(), 1);
        assert_eq!(CheckStatus::Critical.exit_code(), 2);
        assert_eq!(CheckStatus::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_render_without_perf_datum() {
        let result = CheckResult::new(CheckStatus::Warning, "Last ping was 200 seconds ago");
        assert_eq!(result.to_string(), "WARNING: Last ping was 200 seconds ago");
        assert!(result.perf_datum().is_none());
    }

    #[test]
    fn test_render_with_perf_datum() {
        let result = CheckResult::new(CheckStatus::Ok, "55 active connections opened")
            .with_perf_datum(PerfDatum::new("CONNECTIONS", 55.0));
        assert_eq!(result.to_string(), "OK: 55 active connections opened | CONNECTIONS=55");
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_unknown() {
        let result = CheckResult::unknown("API Error: Not Found ()");
        assert_eq!(result.status(), CheckStatus::Unknown);
        assert_eq!(result.exit_code(), 3);
        assert_eq!(result.message(), "API Error: Not Found ()");
    }
}
