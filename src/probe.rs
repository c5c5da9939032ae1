//! One probe invocation, end to end.
//!
//! Loads credentials, fetches the host (and metric) from the API, then
//! hands the snapshot to the evaluator. Every failure along the way turns
//! into an UNKNOWN result carrying the error text; nothing is retried.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use mms_client::{ClientError, MmsClient};

use crate::check::{check_connectivity, check_metric, CheckResult, ThresholdError, Thresholds};
use crate::credentials::{self, CredentialError, Credentials};
use crate::settings::CheckConfig;

/// Anything that stops the probe from reaching a verdict.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error(transparent)]
    Thresholds(#[from] ThresholdError),

    #[error("No hostname given. Use -H hostname:port")]
    MissingHostname,

    #[error("Failed to create API. Error: {0}")]
    Client(#[source] ClientError),

    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Run the probe with credentials from `~/.mongodb_mms`.
pub async fn run(config: &CheckConfig) -> CheckResult {
    match credentials::load_from_home() {
        Ok(credentials) => run_with_credentials(config, &credentials).await,
        Err(err) => unknown(ProbeError::from(err)),
    }
}

/// Run the probe with the given credentials.
pub async fn run_with_credentials(config: &CheckConfig, credentials: &Credentials) -> CheckResult {
    probe(config, credentials).await.unwrap_or_else(unknown)
}

async fn probe(config: &CheckConfig, credentials: &Credentials) -> Result<CheckResult, ProbeError> {
    if config.hostname.is_empty() {
        return Err(ProbeError::MissingHostname);
    }

    let client = MmsClient::builder()
        .endpoint(config.server_url.as_str())
        .credentials(credentials.username.as_str(), credentials.apikey.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(ProbeError::Client)?;

    let host = client
        .get_host_by_name(&config.group_id, &config.hostname)
        .await?;
    debug!(host = %host.id, hostname = %config.hostname, "host resolved");

    let thresholds = Thresholds::new(config.warning.as_str(), config.critical.as_str());
    let result = match config.metric.as_deref() {
        None => check_connectivity(&host, &thresholds, Utc::now())?,
        Some(name) => {
            let metric = client
                .get_host_metric(&config.group_id, &host.id, name)
                .await?;
            check_metric(name, &metric, &thresholds, config.max_age, Utc::now())?
        }
    };

    Ok(result)
}

fn unknown(err: ProbeError) -> CheckResult {
    debug!(error = %err, "probe failed");
    CheckResult::unknown(err.to_string())
}
