//! `fleet-core` — foundational types for the `fleetsim` delivery simulator.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `PackageId`, `VehicleId`, `NodeId`                  |
//! | [`time`]     | `ClockTime`, `DayClock`                             |
//! | [`location`] | `Location` (street/zip identity)                    |
//! | [`package`]  | `Package`, `PackageStatus`, `SpecialHandling`       |
//! | [`config`]   | `FleetConfig`                                       |
//! | [`error`]    | `FleetError`, `TimeError`, `FleetResult`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod config;
pub mod error;
pub mod ids;
pub mod location;
pub mod package;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AddressCorrection, FleetConfig};
pub use error::{FleetError, FleetResult, TimeError};
pub use ids::{NodeId, PackageId, VehicleId};
pub use location::Location;
pub use package::{Package, PackageStatus, SpecialHandling};
pub use time::{ClockTime, DayClock};
