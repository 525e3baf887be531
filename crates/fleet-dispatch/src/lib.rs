//! `fleet-dispatch` — package-to-vehicle assignment and CSV data loading
//! for the `fleetsim` delivery simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`assign`] | the six constraint passes, `build_fleet`           |
//! | [`loader`] | CSV package and distance-table readers             |
//! | [`error`]  | `DispatchError`, `DispatchResult`                  |

pub mod assign;
pub mod error;
pub mod loader;


pub use assign::{assign_packages, build_fleet};
pub use error::{DispatchError, DispatchResult};
pub use loader::{
    load_distances_csv, load_distances_reader, load_packages_csv, load_packages_reader,
};
