//! Ampio smog API client.
//!
//! This module provides an HTTP client for the Ampio air-quality network,
//! which publishes readings per monitoring station.
//!
//! Key characteristics of the API:
//! - `/api/devices/{id}` returns a single object with the latest reading,
//!   device name, location and last-seen time
//! - `/lastHour/{id}` returns an array of readings, oldest first, which
//!   also carry temperature but no device metadata
//! - Unknown or offline stations come back as an empty array or a body
//!   that is not JSON at all

mod client;
mod convert;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod types;

pub use client::{
    AmpioClient, AmpioConfig, DEFAULT_BASE_URL, DEVICE_PATH_TEMPLATE, HISTORY_PATH_TEMPLATE,
};
pub use convert::{AmpioResponse, latest_point};
pub use error::AmpioError;
pub use types::{DeviceSummary, HistoryPoint};
