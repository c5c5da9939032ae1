//! API credentials.
//!
//! Credentials live in `~/.mongodb_mms`, one `key=value` per line:
//!
//! ```text
//! # MMS / Ops Manager public API access
//! username = ops@example.com
//! apikey = 0123abcd-...
//! ```
//!
//! Blank lines and lines starting with `#` are ignored, as are lines
//! without `=`. `MMS_USERNAME` and `MMS_APIKEY` in the environment take
//! precedence over the file.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map, Source, Value};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// File name of the credentials file, relative to the home directory.
pub const CREDENTIALS_FILE: &str = ".mongodb_mms";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "MMS";

/// Errors raised while loading credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to find home directory.")]
    HomeDir,

    #[error("Failed to load {}. Error: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// API user and key. Missing entries are empty strings.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub apikey: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("apikey", &"<redacted>")
            .finish()
    }
}

/// Load credentials from `~/.mongodb_mms`.
pub fn load_from_home() -> Result<Credentials, CredentialError> {
    let home = dirs::home_dir().ok_or(CredentialError::HomeDir)?;
    load_from_path(&home.join(CREDENTIALS_FILE))
}

/// Load credentials from an explicit file.
pub fn load_from_path(path: &Path) -> Result<Credentials, CredentialError> {
    let to_error = |source: ConfigError| CredentialError::Load {
        path: path.to_path_buf(),
        source,
    };

    let credentials: Credentials = Config::builder()
        .add_source(CredentialFile::new(path))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .map_err(to_error)?
        .try_deserialize()
        .map_err(to_error)?;

    debug!(path = %path.display(), username = %credentials.username, "credentials loaded");
    Ok(credentials)
}

/// A `key=value` credentials file as a configuration source.
#[derive(Debug, Clone)]
pub struct CredentialFile {
    path: PathBuf,
}

impl CredentialFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for CredentialFile {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        let origin = self.path.display().to_string();

        Ok(parse_key_values(&content)
            .into_iter()
            .map(|(key, value)| (key, Value::new(Some(&origin), value)))
            .collect())
    }
}

/// Parse `key=value` lines. Later duplicates win.
pub fn parse_key_values(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
