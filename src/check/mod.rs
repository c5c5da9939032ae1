//! Threshold evaluation and result classification.
//!
//! ## Submodules
//!
//! - [`range`]: Nagios threshold ranges (`~:150`, `@10:20`, ...)
//! - [`format`]: Human-readable messages for metric readings
//! - [`evaluate`]: Connectivity and metric checks producing a [`CheckResult`]
//! - [`report`]: [`CheckStatus`], [`CheckResult`] and plugin-output rendering
//!
//! ## Data Flow
//!
//! ```text
//! Host / Metric (from the API)
//!        │
//!        ▼
//! check_connectivity() / check_metric()
//!        │
//!        ├──▶ Thresholds::classify() (parse + check critical, then warning)
//!        │
//!        └──▶ format_metric() (message text)
//!        │
//!        ▼
//! CheckResult ──▶ "STATUS: message | label=value", exit code
//! ```

pub mod evaluate;
pub mod format;
pub mod range;
pub mod report;

pub use evaluate::{check_connectivity, check_metric, ThresholdError, Thresholds};
pub use format::format_metric;
pub use range::{RangeError, ThresholdRange};
pub use report::{CheckResult, CheckStatus, PerfDatum};
