//! # mms-types
//!
//! Value types for the records served by the MMS / Ops Manager public API.
//! Every type is a plain snapshot: built once from a response body and then
//! read by whoever evaluates it.
//!
//! ## Features
//!
//! - `serde`: deserialization from (and serialization to) the API's JSON
//!   shape, including RFC 3339 timestamps.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use mms_types::{DataPoint, Metric};
//!
//! let metric = Metric::new("CONNECTIONS", "RAW")
//!     .with_point(DataPoint::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap(), 12.0))
//!     .with_point(DataPoint::new(Utc.timestamp_opt(1_700_000_060, 0).unwrap(), 14.0));
//!
//! assert_eq!(metric.latest().map(|p| p.value), Some(14.0));
//! ```

mod host;
mod metric;

pub use host::*;
pub use metric::*;
