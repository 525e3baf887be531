use thiserror::Error;

use fleet_core::{PackageId, VehicleId};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("fleet of {0} vehicles is too small for constraint assignment (need at least 3)")]
    FleetTooSmall(usize),

    #[error("package {package} cannot be placed: every remainder vehicle is at capacity {capacity}")]
    CapacityExceeded { package: PackageId, capacity: usize },

    #[error("package {package} is pinned to unknown vehicle {vehicle}")]
    UnknownVehicle { package: PackageId, vehicle: VehicleId },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
