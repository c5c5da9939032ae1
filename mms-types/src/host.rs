//! Managed host records.

use chrono::{DateTime, Utc};

/// A host (mongod / mongos) managed by a group.
///
/// Only `id` and `last_ping` are required for evaluation; the descriptive
/// fields are populated when the API includes them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Host {
    /// Opaque identifier used in per-host API paths.
    pub id: String,

    /// When the monitoring agent last reached this host.
    pub last_ping: DateTime<Utc>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub hostname: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub port: Option<u16>,

    /// Role reported by the agent, e.g. `REPLICA_PRIMARY` or `STANDALONE`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub type_name: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub replica_set_name: Option<String>,
}

impl Host {
    /// Create a host with only the fields needed for a connectivity check.
    pub fn new(id: impl Into<String>, last_ping: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            last_ping,
            hostname: None,
            port: None,
            type_name: None,
            replica_set_name: None,
        }
    }

    /// Set the hostname and port.
    pub fn with_address(mut self, hostname: impl Into<String>, port: u16) -> Self {
        self.hostname = Some(hostname.into());
        self.port = Some(port);
        self
    }

    /// `hostname:port`, or just the hostname when no port is known.
    pub fn address(&self) -> Option<String> {
        let hostname = self.hostname.as_deref()?;
        Some(match self.port {
            Some(port) => format!("{}:{}", hostname, port),
            None => hostname.to_string(),
        })
    }
}

/// Envelope returned by the host listing endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostsResponse {
    #[cfg_attr(feature = "serde", serde(rename = "results", default))]
    pub hosts: Vec<Host>,
}
