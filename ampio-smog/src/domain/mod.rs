//! Domain types for Ampio smog stations.
//!
//! `StationId` is validated at construction so it can always be placed in
//! a request path. `StationSnapshot` is the record a fetch produces.

mod snapshot;
mod station_id;

pub use snapshot::StationSnapshot;
pub use station_id::{InvalidStationId, StationId};
