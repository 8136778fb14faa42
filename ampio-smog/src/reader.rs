//! Station reader.
//!
//! `AmpioSmog` keeps the latest snapshot of one station. Reads are best
//! effort: an unreachable station or a bad payload leaves every field
//! `None` instead of failing the caller's polling loop.

use tracing::{debug, warn};

use crate::ampio::{AmpioClient, AmpioConfig, AmpioError};
use crate::domain::{StationId, StationSnapshot};

/// Reader for a single Ampio monitoring station.
///
/// Construction does no I/O. Each [`fetch`](Self::fetch) performs one GET
/// and replaces the whole snapshot, so values never carry over from an
/// earlier fetch.
///
/// ```no_run
/// # async fn run() {
/// use ampio_smog::{AmpioSmog, domain::StationId};
///
/// let session = reqwest::Client::new();
/// let mut station = AmpioSmog::new(StationId::from(16u32), session);
///
/// station.fetch().await;
/// println!("PM 10: {:?}", station.pm10());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AmpioSmog {
    sensor_id: StationId,
    client: AmpioClient,
    snapshot: StationSnapshot,
}

impl AmpioSmog {
    /// Create a reader for the production device summary endpoint.
    ///
    /// `session` is shared with the caller; the reader never closes it.
    pub fn new(sensor_id: StationId, session: reqwest::Client) -> Self {
        Self::from_client(sensor_id, AmpioClient::new(session, AmpioConfig::new()))
    }

    /// Create a reader for a custom endpoint.
    ///
    /// Fails with [`AmpioError::InvalidConfig`] if `config` cannot produce
    /// a request URL.
    pub fn with_config(
        sensor_id: StationId,
        session: reqwest::Client,
        config: AmpioConfig,
    ) -> Result<Self, AmpioError> {
        config.validate()?;
        Ok(Self::from_client(sensor_id, AmpioClient::new(session, config)))
    }

    fn from_client(sensor_id: StationId, client: AmpioClient) -> Self {
        Self {
            sensor_id,
            client,
            snapshot: StationSnapshot::default(),
        }
    }

    /// Fetch the station's latest metrics.
    ///
    /// Never fails: on any error the snapshot is left empty and the cause
    /// is logged.
    pub async fn fetch(&mut self) -> &StationSnapshot {
        if let Err(err) = self.refresh().await {
            if err.is_transport() {
                warn!(station = %self.sensor_id, error = %err, "station unreachable");
            } else {
                debug!(station = %self.sensor_id, error = %err, "no usable station data");
            }
        }

        &self.snapshot
    }

    /// Fetch the station's latest metrics, reporting why a read came back empty.
    ///
    /// The snapshot is updated exactly as by [`fetch`](Self::fetch).
    pub async fn try_fetch(&mut self) -> Result<&StationSnapshot, AmpioError> {
        self.refresh().await?;
        Ok(&self.snapshot)
    }

    async fn refresh(&mut self) -> Result<(), AmpioError> {
        self.snapshot = StationSnapshot::default();
        self.snapshot = self.client.fetch_snapshot(&self.sensor_id).await?;
        Ok(())
    }

    /// The station this reader was created for.
    pub fn sensor_id(&self) -> &StationId {
        &self.sensor_id
    }

    /// The metrics from the most recent fetch.
    pub fn snapshot(&self) -> &StationSnapshot {
        &self.snapshot
    }

    /// Device display name.
    pub fn name(&self) -> Option<&str> {
        self.snapshot.name.as_deref()
    }

    /// Last report time, verbatim from the server.
    pub fn last_seen(&self) -> Option<&str> {
        self.snapshot.last_seen.as_deref()
    }

    /// PM10 concentration.
    pub fn pm10(&self) -> Option<f64> {
        self.snapshot.pm10
    }

    /// PM2.5 concentration.
    pub fn pm2_5(&self) -> Option<f64> {
        self.snapshot.pm2_5
    }

    /// Relative humidity.
    pub fn humidity(&self) -> Option<f64> {
        self.snapshot.humidity
    }

    /// Air pressure.
    pub fn pressure(&self) -> Option<f64> {
        self.snapshot.pressure
    }

    /// Air temperature, only reported by the hourly history.
    pub fn temperature(&self) -> Option<f64> {
        self.snapshot.temperature
    }

    /// Station latitude, only reported by the device summary.
    pub fn latitude(&self) -> Option<f64> {
        self.snapshot.latitude
    }

    /// Station longitude, only reported by the device summary.
    pub fn longitude(&self) -> Option<f64> {
        self.snapshot.longitude
    }
}
