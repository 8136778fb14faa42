//! Ampio smog API HTTP client.

use tracing::debug;

use crate::domain::{StationId, StationSnapshot};

use super::convert::AmpioResponse;
use super::error::AmpioError;

/// Default base URL for the Ampio smog API.
pub const DEFAULT_BASE_URL: &str = "http://smog1.ampio.pl";

/// Path of the device summary endpoint (single-object responses).
pub const DEVICE_PATH_TEMPLATE: &str = "/api/devices/{id}";

/// Path of the hourly history endpoint (array responses).
pub const HISTORY_PATH_TEMPLATE: &str = "/lastHour/{id}";

/// Placeholder replaced by the station id in a path template.
const ID_PLACEHOLDER: &str = "{id}";

/// Configuration for the Ampio client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmpioConfig {
    /// Scheme and host of the API, optionally with a port
    pub base_url: String,
    /// Request path containing `{id}`
    pub path_template: String,
}

impl AmpioConfig {
    /// Create a config for the production device summary endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path_template: DEVICE_PATH_TEMPLATE.to_string(),
        }
    }

    /// Set a custom base URL (for testing or other deployments).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request path template, e.g. [`HISTORY_PATH_TEMPLATE`].
    pub fn with_path_template(mut self, template: impl Into<String>) -> Self {
        self.path_template = template.into();
        self
    }

    /// Check that the config can produce a request URL.
    pub fn validate(&self) -> Result<(), AmpioError> {
        if self.base_url.trim().is_empty() {
            return Err(AmpioError::InvalidConfig(
                "base URL must be non-empty".to_string(),
            ));
        }

        if !self.path_template.contains(ID_PLACEHOLDER) {
            return Err(AmpioError::InvalidConfig(format!(
                "path template must contain {ID_PLACEHOLDER}, got {:?}",
                self.path_template
            )));
        }

        Ok(())
    }

    /// Build the request URL for a station.
    pub fn device_url(&self, id: &StationId) -> String {
        let path = self.path_template.replace(ID_PLACEHOLDER, id.as_str());
        let base = self.base_url.trim_end_matches('/');

        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for AmpioConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Ampio smog API.
///
/// Wraps a caller-owned `reqwest::Client`. Cloning an `AmpioClient` shares
/// the same connection pool, as does building several clients from clones
/// of one session.
#[derive(Debug, Clone)]
pub struct AmpioClient {
    http: reqwest::Client,
    config: AmpioConfig,
}

impl AmpioClient {
    /// Create a client on top of an existing HTTP session.
    pub fn new(http: reqwest::Client, config: AmpioConfig) -> Self {
        Self { http, config }
    }

    /// The endpoint configuration in use.
    pub fn config(&self) -> &AmpioConfig {
        &self.config
    }

    /// Fetch the latest metrics for a station.
    ///
    /// The body is interpreted whatever the HTTP status, since the API
    /// signals missing stations through the payload rather than the status.
    pub async fn fetch_snapshot(&self, id: &StationId) -> Result<StationSnapshot, AmpioError> {
        let url = self.config.device_url(id);
        debug!(station = %id, %url, "requesting station data");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(station = %id, %status, bytes = body.len(), "received station data");

        AmpioResponse::parse(&body).map(StationSnapshot::from)
    }
}
