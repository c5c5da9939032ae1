//! MMS / Ops Manager public API client.
//!
//! Every call is a single authenticated `GET` against
//! `{endpoint}/api/public/v1.0/...`. A non-200 status is turned into a
//! [`ClientError`] carrying the API's own `reason` and `detail`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mms_client::MmsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MmsClient::builder()
//!         .endpoint("https://opsmanager.example.com:8080")
//!         .credentials("ops@example.com", "api-key")
//!         .build()?;
//!
//!     for host in client.get_all_hosts("5363cd319194bf134f77e6e0").await? {
//!         println!("{} last pinged at {}", host.id, host.last_ping);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use mms_types::{Host, HostsResponse, Metric};

use crate::ClientError;

/// The hosted MMS service.
pub const DEFAULT_ENDPOINT: &str = "https://mms.mongodb.com";

const API_PREFIX: &str = "/api/public/v1.0";

/// Client for the host and metric endpoints of the public API.
#[derive(Debug, Clone)]
pub struct MmsClient {
    client: Client,
    endpoint: String,
    username: String,
    api_key: String,
}

impl MmsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> MmsClientBuilder {
        MmsClientBuilder::default()
    }

    /// Base URL of the service, without the API prefix.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// List every host in a group.
    pub async fn get_all_hosts(&self, group_id: &str) -> Result<Vec<Host>, ClientError> {
        let path = format!("/groups/{}/hosts", path_segment(group_id));
        let response: HostsResponse = self.get_json(&path).await?;
        Ok(response.hosts)
    }

    /// Look a host up by its `hostname:port` name.
    pub async fn get_host_by_name(&self, group_id: &str, name: &str) -> Result<Host, ClientError> {
        let path = format!(
            "/groups/{}/hosts/byName/{}",
            path_segment(group_id),
            path_segment(name)
        );
        self.get_json(&path).await
    }

    /// Fetch one measurement series for a host.
    pub async fn get_host_metric(
        &self,
        group_id: &str,
        host_id: &str,
        metric_name: &str,
    ) -> Result<Metric, ClientError> {
        let path = format!(
            "/groups/{}/hosts/{}/metrics/{}",
            path_segment(group_id),
            path_segment(host_id),
            path_segment(metric_name)
        );
        self.get_json(&path).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let body = self.get(path).await?;

        serde_json::from_str(&body).map_err(|e| ClientError::Parse {
            message: e.to_string(),
            body,
        })
    }

    async fn get(&self, path: &str) -> Result<String, ClientError> {
        let url = self.url(path);
        debug!(%url, "requesting");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Body(e.to_string()))?;

        if status != StatusCode::OK {
            debug!(%url, %status, "request rejected");
            return Err(ClientError::from_error_body(&body));
        }

        Ok(body)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.endpoint.trim_end_matches('/'), API_PREFIX, path)
    }
}

/// Builder for [`MmsClient`].
#[derive(Debug, Default)]
pub struct MmsClientBuilder {
    endpoint: Option<String>,
    username: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl MmsClientBuilder {
    /// Set the service base URL (default: [`DEFAULT_ENDPOINT`]).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API user and key.
    pub fn credentials(mut self, username: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the connect and request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// Connections are not kept alive between requests.
    pub fn build(self) -> Result<MmsClient, ClientError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(MmsClient {
            client,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            username: self.username.unwrap_or_default(),
            api_key: self.api_key.unwrap_or_default(),
        })
    }
}

// Escape characters that would otherwise split a path segment
fn path_segment(s: &str) -> String {
    s.replace('%', "%25").replace('/', "%2F").replace(' ', "%20")
}
