//! Classification of host connectivity and metric readings.
//!
//! Both checks are pure: they take a snapshot fetched from the API and a
//! single sample of "now", and return exactly one [`CheckResult`].
//! Critical is always tested before warning, so a value inside both
//! alarm ranges reports the more severe state.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use mms_types::{Host, Metric};

use super::format::format_metric;
use super::range::{RangeError, ThresholdRange};
use super::report::{CheckResult, CheckStatus, PerfDatum};

/// A threshold argument that could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("Error parsing critical range. Error: {0}")]
    Critical(#[source] RangeError),

    #[error("Error parsing warning range. Error: {0}")]
    Warning(#[source] RangeError),
}

/// The warning and critical ranges for one check, as given.
///
/// Ranges are parsed only when classification reaches them: critical
/// first, warning only if critical did not alarm. The ranges are
/// independent; nothing requires warning to sit inside critical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: String,
    pub critical: String,
}

impl Thresholds {
    pub fn new(warning: impl Into<String>, critical: impl Into<String>) -> Self {
        Self {
            warning: warning.into(),
            critical: critical.into(),
        }
    }

    /// Status for a value.
    pub fn classify(&self, value: f64) -> Result<CheckStatus, ThresholdError> {
        let critical = ThresholdRange::parse(&self.critical).map_err(ThresholdError::Critical)?;
        if critical.check(value) {
            return Ok(CheckStatus::Critical);
        }

        let warning = ThresholdRange::parse(&self.warning).map_err(ThresholdError::Warning)?;
        if warning.check(value) {
            Ok(CheckStatus::Warning)
        } else {
            Ok(CheckStatus::Ok)
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new("~:", "~:")
    }
}

/// Classify how long ago the monitoring agent last reached `host`.
pub fn check_connectivity(
    host: &Host,
    thresholds: &Thresholds,
    now: DateTime<Utc>,
) -> Result<CheckResult, ThresholdError> {
    let age = now.signed_duration_since(host.last_ping);
    let seconds = age.num_milliseconds() as f64 / 1000.0;
    let status = thresholds.classify(seconds)?;

    debug!(host = %host.id, seconds, %status, "connectivity classified");
    Ok(CheckResult::new(status, format!("Last ping was {} seconds ago", seconds)))
}

/// Classify the latest reading of the metric requested as `name`.
///
/// An empty series is UNKNOWN. A latest point older than `max_age` is
/// CRITICAL before any threshold is looked at; otherwise the reading is
/// recorded as a performance datum and classified. `name` labels the
/// status messages and the datum; the reading itself is described under
/// the name the API returned.
pub fn check_metric(
    name: &str,
    metric: &Metric,
    thresholds: &Thresholds,
    max_age: Duration,
    now: DateTime<Utc>,
) -> Result<CheckResult, ThresholdError> {
    let Some(latest) = metric.latest() else {
        return Ok(CheckResult::unknown(format!("No data points found for {}", name)));
    };

    let age = now.signed_duration_since(latest.timestamp).num_seconds();
    let max_age = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
    if age > max_age {
        debug!(metric = name, age, max_age, "latest data point is stale");
        return Ok(CheckResult::new(
            CheckStatus::Critical,
            format!("Last data point for {} is {} seconds old.", name, age),
        ));
    }

    let status = thresholds.classify(latest.value)?;
    debug!(metric = name, value = latest.value, %status, "metric classified");

    let reported = if metric.metric_name.is_empty() {
        name
    } else {
        metric.metric_name.as_str()
    };
    Ok(
        CheckResult::new(status, format_metric(reported, latest.value, &metric.units))
            .with_perf_datum(PerfDatum::new(name, latest.value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mms_types::DataPoint;

    const MAX_AGE: Duration = Duration::from_secs(180);

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn seconds_ago(secs: i64) -> DateTime<Utc> {
        now() - chrono::Duration::seconds(secs)
    }

    fn connections(value: f64, secs_ago: i64) -> Metric {
        Metric::new("CONNECTIONS", "RAW")
            .with_point(DataPoint::new(seconds_ago(secs_ago + 60), 1.0))
            .with_point(DataPoint::new(seconds_ago(secs_ago), value))
    }

    fn connectivity(secs_ago: i64, t: &Thresholds) -> CheckResult {
        check_connectivity(&Host::new("h1", seconds_ago(secs_ago)), t, now()).unwrap()
    }

    fn metric(m: &Metric, t: &Thresholds) -> CheckResult {
        check_metric("CONNECTIONS", m, t, MAX_AGE, now()).unwrap()
    }

    #[test]
    fn test_classify_reports_which_range_failed() {
        let err = Thresholds::new("~:10", "bogus").classify(1.0).unwrap_err();
        assert!(matches!(err, ThresholdError::Critical(_)));
        assert!(err.to_string().starts_with("Error parsing critical range. Error: "));

        let err = Thresholds::new("bogus", "~:10").classify(1.0).unwrap_err();
        assert!(matches!(err, ThresholdError::Warning(_)));
        assert!(err.to_string().starts_with("Error parsing warning range. Error: "));
    }

    #[test]
    fn test_warning_is_not_parsed_when_critical_alarms() {
        let t = Thresholds::new("bogus", "~:10");
        assert_eq!(t.classify(20.0), Ok(CheckStatus::Critical));
        assert!(t.classify(5.0).is_err());
    }

    #[test]
    fn test_critical_wins_over_warning() {
        // Warning is deliberately not nested inside critical.
        let t = Thresholds::new("~:10", "~:5");
        assert_eq!(t.classify(3.0), Ok(CheckStatus::Ok));
        assert_eq!(t.classify(7.0), Ok(CheckStatus::Critical));
        assert_eq!(t.classify(20.0), Ok(CheckStatus::Critical));

        let t = Thresholds::new("@0:100", "@50:60");
        assert_eq!(t.classify(55.0), Ok(CheckStatus::Critical));
        assert_eq!(t.classify(40.0), Ok(CheckStatus::Warning));
        assert_eq!(t.classify(150.0), Ok(CheckStatus::Ok));
    }

    #[test]
    fn test_connectivity_warning() {
        let result = connectivity(200, &Thresholds::new("~:150", "~:300"));

        assert_eq!(result.status(), CheckStatus::Warning);
        assert_eq!(result.message(), "Last ping was 200 seconds ago");
        assert!(result.perf_datum().is_none());
    }

    #[test]
    fn test_connectivity_ok_and_critical() {
        let t = Thresholds::new("~:150", "~:300");

        let result = connectivity(30, &t);
        assert_eq!(result.status(), CheckStatus::Ok);
        assert_eq!(result.message(), "Last ping was 30 seconds ago");

        let result = connectivity(301, &t);
        assert_eq!(result.status(), CheckStatus::Critical);
        assert_eq!(result.message(), "Last ping was 301 seconds ago");
    }

    #[test]
    fn test_connectivity_boundary_is_safe() {
        let result = connectivity(150, &Thresholds::new("~:150", "~:300"));
        assert_eq!(result.status(), CheckStatus::Ok);
    }

    #[test]
    fn test_connectivity_fractional_age() {
        let host = Host::new("h1", now() - chrono::Duration::milliseconds(150_500));
        let result = check_connectivity(&host, &Thresholds::new("~:150", "~:300"), now()).unwrap();
        assert_eq!(result.status(), CheckStatus::Warning);
        assert_eq!(result.message(), "Last ping was 150.5 seconds ago");
    }

    #[test]
    fn test_connectivity_critical_ignores_bad_warning() {
        let result = connectivity(5, &Thresholds::new("bogus", "~:1"));
        assert_eq!(result.status(), CheckStatus::Critical);
        assert_eq!(result.message(), "Last ping was 5 seconds ago");
    }

    #[test]
    fn test_connectivity_bad_warning_when_critical_is_quiet() {
        let host = Host::new("h1", seconds_ago(5));
        let err = check_connectivity(&host, &Thresholds::new("bogus", "~:300"), now()).unwrap_err();
        assert!(matches!(err, ThresholdError::Warning(_)));
    }

    #[test]
    fn test_metric_warning_with_perf_datum() {
        let result = metric(&connections(55.0, 10), &Thresholds::new("~:50", "~:100"));

        assert_eq!(result.status(), CheckStatus::Warning);
        assert_eq!(result.message(), "55 active connections opened");
        assert_eq!(result.perf_datum(), Some(&PerfDatum::new("CONNECTIONS", 55.0)));
        assert_eq!(
            result.to_string(),
            "WARNING: 55 active connections opened | CONNECTIONS=55"
        );
    }

    #[test]
    fn test_metric_critical_precedence() {
        let result = metric(&connections(150.0, 10), &Thresholds::new("~:50", "~:100"));
        assert_eq!(result.status(), CheckStatus::Critical);
        assert_eq!(result.message(), "150 active connections opened");
    }

    #[test]
    fn test_metric_ok() {
        let result = metric(&connections(12.0, 10), &Thresholds::new("~:50", "~:100"));
        assert_eq!(result.status(), CheckStatus::Ok);
        assert_eq!(result.perf_datum().map(|d| d.value), Some(12.0));
    }

    #[test]
    fn test_metric_uses_latest_point() {
        let m = Metric::new("CONNECTIONS", "RAW")
            .with_point(DataPoint::new(seconds_ago(120), 500.0))
            .with_point(DataPoint::new(seconds_ago(60), 5.0));

        let result = metric(&m, &Thresholds::new("~:50", "~:100"));
        assert_eq!(result.status(), CheckStatus::Ok);
        assert_eq!(result.message(), "5 active connections opened");
    }

    #[test]
    fn test_metric_without_points_is_unknown() {
        let m = Metric::new("CONNECTIONS", "RAW");
        for (w, c) in [("~:", "~:"), ("~:50", "~:100"), ("bogus", "bogus")] {
            let result = metric(&m, &Thresholds::new(w, c));
            assert_eq!(result.status(), CheckStatus::Unknown);
            assert_eq!(result.message(), "No data points found for CONNECTIONS");
            assert!(result.perf_datum().is_none());
        }
    }

    #[test]
    fn test_stale_metric_is_critical_even_with_never_alarm_ranges() {
        let result = metric(&connections(1.0, 181), &Thresholds::default());

        assert_eq!(result.status(), CheckStatus::Critical);
        assert_eq!(result.message(), "Last data point for CONNECTIONS is 181 seconds old.");
        assert!(result.perf_datum().is_none());
    }

    #[test]
    fn test_stale_metric_is_critical_with_malformed_ranges() {
        let result = metric(&connections(1.0, 600), &Thresholds::new("bogus", "~:"));
        assert_eq!(result.status(), CheckStatus::Critical);
        assert_eq!(result.message(), "Last data point for CONNECTIONS is 600 seconds old.");
    }

    #[test]
    fn test_metric_at_max_age_is_not_stale() {
        let result = metric(&connections(1.0, 180), &Thresholds::default());
        assert_eq!(result.status(), CheckStatus::Ok);
    }

    #[test]
    fn test_requested_name_labels_status_and_datum() {
        let m = Metric::new("CONNECTIONS", "RAW").with_point(DataPoint::new(seconds_ago(5), 7.0));
        let result = check_metric("connections", &m, &Thresholds::default(), MAX_AGE, now()).unwrap();
        assert_eq!(result.to_string(), "OK: 7 active connections opened | connections=7");

        let empty = Metric::new("CONNECTIONS", "RAW");
        let result = check_metric("connections", &empty, &Thresholds::default(), MAX_AGE, now()).unwrap();
        assert_eq!(result.message(), "No data points found for connections");
    }

    #[test]
    fn test_empty_returned_name_falls_back_to_requested() {
        let m = Metric::new("", "RAW").with_point(DataPoint::new(seconds_ago(5), 7.0));
        let result = metric(&m, &Thresholds::default());
        assert_eq!(result.message(), "7 active connections opened");
    }

    #[test]
    fn test_unknown_metric_message_falls_back() {
        let m = Metric::new("CACHE_DIRTY", "KILOBYTES").with_point(DataPoint::new(seconds_ago(5), 42.0));

        let result = check_metric("CACHE_DIRTY", &m, &Thresholds::default(), MAX_AGE, now()).unwrap();
        assert_eq!(result.to_string(), "OK: CACHE_DIRTY 42 KB | CACHE_DIRTY=42");
    }
}
