//! Ampio API response DTOs.
//!
//! The API has two response shapes: a summary object for a device and a
//! list of hourly readings. Fields are decoded one at a time, so a key that
//! is missing or has the wrong JSON type becomes `None` without discarding
//! the rest of the payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response from `/api/devices/{id}`: the latest reading plus device metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceSummary {
    /// Human-readable device name.
    #[serde(rename = "devName", default, deserialize_with = "lenient_string")]
    pub dev_name: Option<String>,

    /// Latest PM2.5 value.
    #[serde(rename = "lastPM25", default, deserialize_with = "lenient_f64")]
    pub last_pm25: Option<f64>,

    /// Latest PM10 value.
    #[serde(rename = "lastPM10", default, deserialize_with = "lenient_f64")]
    pub last_pm10: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub pressure: Option<f64>,

    /// Time of the latest report, e.g. "2019-02-17 17:00:18".
    #[serde(rename = "lastSeen", default, deserialize_with = "lenient_string")]
    pub last_seen: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,
}

/// One element of the `/lastHour/{id}` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryPoint {
    #[serde(rename = "PM25", default, deserialize_with = "lenient_f64")]
    pub pm25: Option<f64>,

    #[serde(rename = "PM10", default, deserialize_with = "lenient_f64")]
    pub pm10: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub humidity: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub pressure: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub temperature: Option<f64>,
}

/// Decode any JSON number as `f64`; anything else is `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

/// Decode a JSON string; anything else is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
