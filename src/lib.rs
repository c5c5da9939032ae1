//! # check-mongodb-mms
//!
//! A Nagios-compatible probe for MongoDB hosts managed by MMS / Ops Manager.
//!
//! The probe asks the Ops Manager public API about one host and reports
//! either how long ago the host last pinged, or the latest reading of a
//! named metric, as OK / WARNING / CRITICAL / UNKNOWN.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CheckConfig ──▶ probe ──▶ MmsClient (mms-client) ──▶ API    │
//! │                    │                                         │
//! │                    ▼                                         │
//! │      Host / Metric (mms-types) ──▶ check ──▶ CheckResult     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`check`]**: threshold ranges, message formatting and the pure
//!   evaluator producing a [`CheckResult`]
//! - **[`credentials`]**: the `~/.mongodb_mms` credentials file
//! - **[`settings`]**: [`CheckConfig`], one invocation's parameters
//! - **[`probe`]**: fetch + evaluate, mapping every failure to UNKNOWN
//! - **[`nagios`]**: service definitions for every host in a group
//! - **[`logging`]**: stderr tracing setup shared by the binaries
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Last ping age, warn after 150s, critical after 300s
//! check_mongodb_mms -g 5363cd319194bf134f77e6e0 -H db1:27017 -w '~:150' -c '~:300'
//!
//! # Open connections
//! check_mongodb_mms -g 5363cd319194bf134f77e6e0 -H db1:27017 -m CONNECTIONS -w '~:500' -c '~:800'
//! ```
//!
//! ### As a library
//!
//! ```
//! use chrono::{Duration, Utc};
//! use check_mongodb_mms::{check_connectivity, CheckStatus, Host, Thresholds};
//!
//! let now = Utc::now();
//! let host = Host::new("h1", now - Duration::seconds(200));
//! let thresholds = Thresholds::new("~:150", "~:300");
//!
//! let result = check_connectivity(&host, &thresholds, now).unwrap();
//! assert_eq!(result.status(), CheckStatus::Warning);
//! assert_eq!(result.to_string(), "WARNING: Last ping was 200 seconds ago");
//! ```

pub mod check;
pub mod credentials;
pub mod logging;
pub mod nagios;
pub mod probe;
pub mod settings;

// Re-export main types for convenience
pub use check::{
    check_connectivity, check_metric, format_metric, CheckResult, CheckStatus, PerfDatum,
    RangeError, ThresholdError, ThresholdRange, Thresholds,
};
pub use credentials::{CredentialError, Credentials};
pub use mms_types::{DataPoint, Host, Metric};
pub use probe::ProbeError;
pub use settings::CheckConfig;
