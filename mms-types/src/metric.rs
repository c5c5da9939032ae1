//! Host measurement series.

use chrono::{DateTime, Utc};

/// A named measurement series for one host.
///
/// Data points are ordered by collection time; the last one is the
/// current reading. An empty series means nothing has been collected yet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metric {
    /// API name of the measurement, e.g. `CONNECTIONS`.
    pub metric_name: String,

    /// Long-form unit name, e.g. `MEGABYTES`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub units: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub data_points: Vec<DataPoint>,
}

impl Metric {
    /// Create a metric with no data points.
    pub fn new(metric_name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            units: units.into(),
            data_points: Vec::new(),
        }
    }

    /// Append a data point.
    pub fn with_point(mut self, point: DataPoint) -> Self {
        self.data_points.push(point);
        self
    }

    /// The most recently collected point, if any.
    pub fn latest(&self) -> Option<&DataPoint> {
        self.data_points.last()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}

/// A single sample of a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,

    /// Sampled value. The API sends `null` for gaps, which reads as zero.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_zero"))]
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

#[cfg(feature = "serde")]
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
