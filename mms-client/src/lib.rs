//! # mms-client
//!
//! Client for the MMS / Ops Manager public REST API (`/api/public/v1.0`).
//!
//! Only the read-only host endpoints are covered: look a host up by name,
//! list every host in a group, and fetch one measurement series for a host.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mms_client::MmsClient;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MmsClient::builder()
//!         .endpoint("https://mms.mongodb.com")
//!         .credentials("ops@example.com", "api-key")
//!         .timeout(Duration::from_secs(10))
//!         .build()?;
//!
//!     let host = client.get_host_by_name("5363cd319194bf134f77e6e0", "db1:27017").await?;
//!     let metric = client
//!         .get_host_metric("5363cd319194bf134f77e6e0", &host.id, "CONNECTIONS")
//!         .await?;
//!
//!     println!("{} points for {}", metric.data_points.len(), metric.metric_name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;

pub use api::{MmsClient, MmsClientBuilder, DEFAULT_ENDPOINT};
pub use error::ClientError;

// Re-export types for convenience
pub use mms_types::{DataPoint, Host, HostsResponse, Metric};
