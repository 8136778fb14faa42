//! Ampio smog station reader.
//!
//! Fetches the latest air-quality readings (particulate matter, humidity,
//! pressure, temperature, location) of one Ampio monitoring station and
//! keeps them as a typed snapshot.

pub mod ampio;
pub mod domain;
pub mod reader;

pub use reader::AmpioSmog;
