//! `fleet-vehicle` — per-vehicle load list, route, and movement cursor for
//! the `fleetsim` delivery simulator.
//!
//! A [`Vehicle`] owns no package data: it holds [`PackageId`]s and the
//! engine resolves them against the exclusively-owned `PackageStore`.  The
//! route is a list of `(stop, cumulative miles)` pairs fixed after
//! route-building; runtime state is just a distance counter and a stop
//! cursor.
//!
//! [`PackageId`]: fleet_core::PackageId

pub mod vehicle;


pub use vehicle::Vehicle;
