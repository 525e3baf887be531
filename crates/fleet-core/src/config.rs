//! Top-level fleet configuration and scheduled run inputs.

use crate::ids::PackageId;
use crate::location::Location;
use crate::time::{ClockTime, DayClock, SECS_PER_HOUR};

/// Operating parameters for one simulated delivery day.
///
/// Typically loaded from a TOML/JSON file by the application crate and
/// passed to the dispatcher and the simulation engine.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    /// Wall time of elapsed second 0 — when the first vehicle may depart.
    pub start_of_day: ClockTime,

    /// Wall time by which every dated package is due.  Packages with a
    /// deadline at or past this instant count as "no deadline".
    pub end_of_day: ClockTime,

    /// Fleet size.  The dispatcher's constraint passes require at least 3.
    pub num_vehicles: usize,

    /// Maximum packages per vehicle.
    pub vehicle_capacity: usize,

    /// Vehicle speed in miles per hour.  Constant for the whole fleet.
    pub vehicle_mph: f64,

    /// Elapsed second at which the delayed cargo reaches the depot and its
    /// wave may depart.
    pub delayed_cargo_secs: u32,

    /// Reference capacity used by the no-deadline and remainder passes.
    pub reference_capacity: usize,
}

impl FleetConfig {
    /// The deployment constants of the original operation: 8:00 AM to
    /// 5:00 PM, three 16-package vehicles at 18 mph, delayed cargo at
    /// 9:05 AM.
    pub fn standard() -> Self {
        Self {
            start_of_day: ClockTime::from_hms(8, 0, 0),
            end_of_day: ClockTime::from_hms(17, 0, 0),
            num_vehicles: 3,
            vehicle_capacity: 16,
            vehicle_mph: 18.0,
            delayed_cargo_secs: 65 * 60, // 9:05 AM
            reference_capacity: 16,
        }
    }

    /// Construct a `DayClock` anchored at this configuration's start of day.
    pub fn make_clock(&self) -> DayClock {
        DayClock::new(self.start_of_day)
    }

    /// Vehicle speed in miles per simulated second (= per tick).
    #[inline]
    pub fn miles_per_sec(&self) -> f64 {
        self.vehicle_mph / SECS_PER_HOUR as f64
    }

    /// End of day as elapsed seconds since the start of day.
    #[inline]
    pub fn end_of_day_secs(&self) -> u32 {
        self.end_of_day.secs_past_midnight() - self.start_of_day.secs_past_midnight()
    }
}

// ── AddressCorrection ─────────────────────────────────────────────────────────

/// A scheduled mid-run destination rewrite.
///
/// The correction is known before the day starts (dispatch pre-binds its
/// effect) but takes effect only when the simulation clock reaches
/// `at_secs`.  Applying it swaps the package's destination; the distance
/// graph is untouched.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressCorrection {
    pub package: PackageId,
    pub new_destination: Location,
    /// Elapsed second at which the correction lands.
    pub at_secs: u32,
}
