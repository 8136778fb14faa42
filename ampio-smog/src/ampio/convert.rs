//! Conversion from Ampio API responses to station snapshots.
//!
//! The response shape alone decides how a body is read: an object is a
//! device summary, an array is an hourly history whose last element is the
//! latest reading. The requested path plays no part.

use serde_json::Value;

use crate::domain::StationSnapshot;

use super::error::AmpioError;
use super::types::{DeviceSummary, HistoryPoint};

/// Longest body excerpt kept in a JSON parse error.
const BODY_EXCERPT_CHARS: usize = 200;

/// A response body classified by shape.
#[derive(Debug, Clone)]
pub enum AmpioResponse {
    /// Single object from `/api/devices/{id}`.
    Summary(DeviceSummary),
    /// Latest element of the array from `/lastHour/{id}`.
    History(HistoryPoint),
}

impl AmpioResponse {
    /// Parse and classify a response body.
    pub fn parse(body: &str) -> Result<Self, AmpioError> {
        let value: Value = serde_json::from_str(body).map_err(|e| AmpioError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })?;

        Self::from_value(value)
    }

    /// Classify an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, AmpioError> {
        match value {
            Value::Object(_) => decode(value).map(AmpioResponse::Summary),
            Value::Array(items) => latest_point(items).map(AmpioResponse::History),
            Value::Null => Err(AmpioError::UnexpectedShape("null")),
            Value::Bool(_) => Err(AmpioError::UnexpectedShape("boolean")),
            Value::Number(_) => Err(AmpioError::UnexpectedShape("number")),
            Value::String(_) => Err(AmpioError::UnexpectedShape("string")),
        }
    }
}

/// Pick the last reading of an hourly history.
///
/// The API lists readings oldest first, so no sorting is done.
pub fn latest_point(items: Vec<Value>) -> Result<HistoryPoint, AmpioError> {
    match items.into_iter().next_back() {
        None => Err(AmpioError::EmptyResult),
        Some(last @ Value::Object(_)) => decode(last),
        Some(_) => Err(AmpioError::UnexpectedShape("history element is not an object")),
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AmpioError> {
    serde_json::from_value(value).map_err(|e| AmpioError::Json {
        message: e.to_string(),
        body: None,
    })
}

impl From<DeviceSummary> for StationSnapshot {
    fn from(summary: DeviceSummary) -> Self {
        Self {
            name: summary.dev_name,
            last_seen: summary.last_seen,
            pm10: summary.last_pm10,
            pm2_5: summary.last_pm25,
            humidity: summary.humidity,
            pressure: summary.pressure,
            temperature: None,
            latitude: summary.lat,
            longitude: summary.lon,
        }
    }
}

impl From<HistoryPoint> for StationSnapshot {
    fn from(point: HistoryPoint) -> Self {
        Self {
            pm10: point.pm10,
            pm2_5: point.pm25,
            humidity: point.humidity,
            pressure: point.pressure,
            temperature: point.temperature,
            ..Default::default()
        }
    }
}

impl From<AmpioResponse> for StationSnapshot {
    fn from(response: AmpioResponse) -> Self {
        match response {
            AmpioResponse::Summary(summary) => summary.into(),
            AmpioResponse::History(point) => point.into(),
        }
    }
}
