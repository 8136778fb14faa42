//! Snapshot of a station's most recently fetched metrics.

use chrono::NaiveDateTime;

/// Format the Ampio API uses for `lastSeen`, e.g. `2019-02-17 17:00:18`.
const LAST_SEEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The last known metrics of a station.
///
/// Every field is `None` until a fetch produces it. Which fields a fetch
/// can produce depends on the response shape: the summary object carries
/// name, location and last-seen time but no temperature, while the hourly
/// history carries temperature but no metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSnapshot {
    /// Device display name.
    pub name: Option<String>,

    /// Last time the station reported, verbatim from the server.
    pub last_seen: Option<String>,

    /// PM10 concentration.
    pub pm10: Option<f64>,

    /// PM2.5 concentration.
    pub pm2_5: Option<f64>,

    /// Relative humidity.
    pub humidity: Option<f64>,

    /// Air pressure.
    pub pressure: Option<f64>,

    /// Air temperature.
    pub temperature: Option<f64>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,
}

impl StationSnapshot {
    /// Whether no field holds a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse `last_seen` as a local timestamp.
    ///
    /// Returns `None` if the station has not been seen or the server used
    /// an unexpected format. `last_seen` itself is never rewritten.
    pub fn last_seen_at(&self) -> Option<NaiveDateTime> {
        let raw = self.last_seen.as_deref()?;
        NaiveDateTime::parse_from_str(raw, LAST_SEEN_FORMAT).ok()
    }
}
