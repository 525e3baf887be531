//! Base error types.
//!
//! Sub-crates define their own error enums and either convert into
//! `FleetError` via `From` impls or wrap it as one variant.  Lookups of
//! unknown packages or vertices are NOT errors anywhere in the workspace —
//! they return `None` so callers can treat "not found" as "no match".

use thiserror::Error;

use crate::ids::{NodeId, PackageId};

/// Wall-clock string conversion failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("unparseable clock time {0:?}")]
    Malformed(String),

    #[error("time {0:?} precedes the start of day")]
    BeforeStart(String),
}

/// The top-level error type for `fleet-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("package {0} not found")]
    PackageNotFound(PackageId),

    #[error("vertex {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
