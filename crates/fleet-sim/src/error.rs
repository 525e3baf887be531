use thiserror::Error;

use fleet_core::{PackageId, VehicleId};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation requires at least one vehicle")]
    EmptyFleet,

    #[error("vehicle {0} carries packages but has no route built")]
    MissingRoute(VehicleId),

    #[error("address correction targets unknown package {0}")]
    UnknownPackage(PackageId),
}

pub type SimResult<T> = Result<T, SimError>;
