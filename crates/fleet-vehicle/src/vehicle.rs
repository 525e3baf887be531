//! The `Vehicle` type.

use fleet_core::{PackageId, PackageStatus, VehicleId};
use fleet_graph::{DistanceGraph, RouteStop, TourPlanner};
use fleet_store::PackageStore;

/// Guard against accumulated floating-point error when comparing the
/// traveled distance to a stop's cumulative mileage.
const ARRIVAL_EPSILON: f64 = 1e-9;

/// One delivery vehicle.
///
/// The load list is fixed after the assignment phase and the route after
/// route-building; only the movement cursor (`miles_traveled`, `next_stop`,
/// `finished`) mutates during the run.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Maximum packages this vehicle can carry.
    pub capacity: usize,
    /// Constant cruising speed, miles per simulated second.
    pub miles_per_sec: f64,

    packages: Vec<PackageId>,
    route: Vec<RouteStop>,
    next_stop: usize,
    miles_traveled: f64,
    departed_at: Option<u32>,
    finished: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, capacity: usize, miles_per_sec: f64) -> Self {
        Self {
            id,
            capacity,
            miles_per_sec,
            packages: Vec::with_capacity(capacity),
            route: Vec::new(),
            next_stop: 0,
            miles_traveled: 0.0,
            departed_at: None,
            finished: false,
        }
    }

    // ── Load list ─────────────────────────────────────────────────────────

    /// Add a package to the load list.  Capacity enforcement is the
    /// dispatcher's job; the vehicle itself just carries what it is given.
    pub fn load(&mut self, package: PackageId) {
        self.packages.push(package);
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn packages(&self) -> &[PackageId] {
        &self.packages
    }

    /// Linear membership scan — load lists are at most a few dozen entries.
    pub fn carries(&self, package: PackageId) -> bool {
        self.packages.contains(&package)
    }

    /// Drop a delivered package from the load list.
    pub fn unload(&mut self, package: PackageId) -> bool {
        match self.packages.iter().position(|&p| p == package) {
            Some(i) => {
                self.packages.remove(i);
                true
            }
            None => false,
        }
    }

    // ── Route ─────────────────────────────────────────────────────────────

    /// Compute and store the nearest-neighbor tour over this vehicle's
    /// distinct destination vertices.
    ///
    /// Destinations resolve through the store and the graph; a package whose
    /// address is not a graph vertex contributes no stop ("not found" is "no
    /// match").  Targets are ordered by vertex insertion index so that
    /// equal-distance ties break reproducibly.
    pub fn build_route(&mut self, graph: &DistanceGraph, store: &PackageStore) {
        let mut targets: Vec<_> = Vec::with_capacity(self.packages.len());
        for &pid in &self.packages {
            if let Some(node) = store.get(pid).and_then(|p| graph.node_of(&p.destination)) {
                if !targets.contains(&node) {
                    targets.push(node);
                }
            }
        }
        targets.sort_unstable_by_key(|n| n.0);

        self.route = TourPlanner::new(graph).plan(graph.hub(), &targets);
        self.next_stop = 0;
        self.miles_traveled = 0.0;
        self.finished = false;
    }

    pub fn route(&self) -> &[RouteStop] {
        &self.route
    }

    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }

    // ── Runtime cursor ────────────────────────────────────────────────────

    /// Depart the hub: every loaded package goes en route, the departure
    /// time is recorded, and the cursor moves past the leading hub stop so
    /// the first real stop becomes the current target.
    pub fn start_route(&mut self, now: u32, store: &mut PackageStore) {
        for &pid in &self.packages {
            if let Some(p) = store.get_mut(pid) {
                p.promote(PackageStatus::EnRoute);
            }
        }
        self.departed_at = Some(now);
        self.next_stop = 1.min(self.route.len());
        self.finished = self.route.is_empty();
    }

    /// Add one tick's travel to the odometer.  Returns the distance actually
    /// moved — zero once the route is finished.
    pub fn advance(&mut self, delta_miles: f64) -> f64 {
        if self.finished {
            return 0.0;
        }
        self.miles_traveled += delta_miles;
        delta_miles
    }

    /// The stop the vehicle is currently driving toward.
    pub fn current_stop(&self) -> Option<&RouteStop> {
        if self.finished {
            return None;
        }
        self.route.get(self.next_stop)
    }

    /// `true` once the odometer reaches the current stop's cumulative
    /// mileage.
    pub fn arrived_at_current_stop(&self) -> bool {
        match self.current_stop() {
            Some(stop) => self.miles_traveled + ARRIVAL_EPSILON >= stop.cumulative_miles,
            None => false,
        }
    }

    /// Advance the cursor to the next stop.  Returns `true` when the route
    /// is exhausted, which latches the `finished` flag.
    pub fn pop_next_stop(&mut self) -> bool {
        self.next_stop += 1;
        if self.next_stop >= self.route.len() {
            self.finished = true;
        }
        self.finished
    }

    #[inline]
    pub fn miles_traveled(&self) -> f64 {
        self.miles_traveled
    }

    #[inline]
    pub fn departed_at(&self) -> Option<u32> {
        self.departed_at
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
