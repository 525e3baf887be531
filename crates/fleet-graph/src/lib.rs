//! `fleet-graph` — distance model and tour construction for the `fleetsim`
//! delivery simulator.
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`graph`] | `DistanceGraph` — N×N symmetric mileage matrix |
//! | [`tour`]  | `TourPlanner`, `RouteStop` — nearest-neighbor tours |

pub mod graph;
pub mod tour;

#[cfg(test)]
mod tests;

pub use graph::DistanceGraph;
pub use tour::{RouteStop, TourPlanner};
