//! The `Simulation` struct and its tick loop.

use std::collections::VecDeque;

use fleet_core::{AddressCorrection, DayClock, FleetConfig, PackageStatus};
use fleet_graph::DistanceGraph;
use fleet_store::PackageStore;
use fleet_vehicle::Vehicle;

use crate::events::{EventSink, FleetEvent};

// ── RunState ──────────────────────────────────────────────────────────────────

/// Engine lifecycle.  `NotStarted → Running` fires once, on the first
/// advance request; `Running → Finished` fires when nothing is active and
/// nothing is queued.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    NotStarted,
    Running,
    Finished,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The discrete-time delivery run.
///
/// Owns every piece of mutable state — the package store, the vehicles, the
/// clock — exclusively; external code drives it through
/// [`run_to`](Self::run_to) / [`run_for`](Self::run_for) and observes it
/// through an [`EventSink`].  Create via
/// [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation {
    config: FleetConfig,
    clock: DayClock,
    store: PackageStore,
    graph: DistanceGraph,

    /// Vehicles currently in the field, in dispatch order.
    active: Vec<Vehicle>,
    /// Vehicles waiting at the hub, in departure-priority order.
    queue: VecDeque<Vehicle>,
    /// Vehicles that completed their route.
    retired: Vec<Vehicle>,

    correction: Option<AddressCorrection>,
    correction_applied: bool,
    delayed_wave_departed: bool,
    state: RunState,
}

impl Simulation {
    pub(crate) fn new(
        config: FleetConfig,
        store: PackageStore,
        graph: DistanceGraph,
        vehicles: Vec<Vehicle>,
        correction: Option<AddressCorrection>,
    ) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            store,
            graph,
            active: Vec::new(),
            queue: vehicles.into(),
            retired: Vec::new(),
            correction,
            correction_applied: false,
            delayed_wave_departed: false,
            state: RunState::NotStarted,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Elapsed seconds since the start of day.
    #[inline]
    pub fn now(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    #[inline]
    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    /// Read access to the exclusively-owned package store.
    pub fn store(&self) -> &PackageStore {
        &self.store
    }

    /// Miles driven so far across the whole fleet.
    pub fn total_miles(&self) -> f64 {
        self.active
            .iter()
            .chain(self.retired.iter())
            .map(Vehicle::miles_traveled)
            .sum()
    }

    /// Advance the simulation to elapsed second `target`, stopping early if
    /// the run finishes.  Safe to call repeatedly; a target at or before the
    /// current time does nothing.
    pub fn run_to<S: EventSink>(&mut self, target: u32, sink: &mut S) {
        if self.state == RunState::NotStarted {
            // First advance request: the first vehicle leaves the hub.
            self.state = RunState::Running;
            self.dispatch_next(self.now(), sink);
        }
        while self.state == RunState::Running && self.now() < target {
            self.step(sink);
        }
    }

    /// Advance the simulation by `delta` seconds (stopping early on finish).
    pub fn run_for<S: EventSink>(&mut self, delta: u32, sink: &mut S) {
        self.run_to(self.now() + delta, sink);
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<S: EventSink>(&mut self, sink: &mut S) {
        // ── ① Clock ───────────────────────────────────────────────────────
        self.clock.advance();
        let now = self.clock.elapsed_secs();

        // ── ② Address correction ──────────────────────────────────────────
        //
        // Latched before any delivery matching this tick, so a corrected
        // package is evaluated against its new destination from this tick's
        // arrival checks onward.  The applied flag makes a second trigger a
        // no-op.
        if let Some(correction) = &self.correction {
            if !self.correction_applied && now >= correction.at_secs {
                if let Some(pkg) = self.store.get_mut(correction.package) {
                    pkg.destination = correction.new_destination.clone();
                }
                self.correction_applied = true;
                sink.on_event(&FleetEvent::AddressCorrected {
                    package: correction.package,
                    at: now,
                });
            }
        }

        // ── ③ Advance active vehicles, in insertion order ─────────────────
        let mut idx = 0;
        while idx < self.active.len() {
            let vehicle = &mut self.active[idx];
            let step_miles = vehicle.miles_per_sec;
            vehicle.advance(step_miles);
            process_arrivals(vehicle, &mut self.store, &self.graph, now, sink);

            if vehicle.is_finished() {
                let done = self.active.remove(idx);
                sink.on_event(&FleetEvent::RouteCompleted {
                    vehicle: done.id,
                    at: now,
                    miles: done.miles_traveled(),
                });
                self.retired.push(done);
            } else {
                idx += 1;
            }
        }

        // ── ④ Delayed-cargo wave ──────────────────────────────────────────
        //
        // Marked departed even if the queue happens to be empty at this
        // instant — the flag is what arms the step-⑤ backfill policy.
        if !self.delayed_wave_departed && now >= self.config.delayed_cargo_secs {
            self.delayed_wave_departed = true;
            self.dispatch_next(now, sink);
        }

        // ── ⑤ Backfill to two in the field ────────────────────────────────
        if self.delayed_wave_departed && self.active.len() < 2 && !self.queue.is_empty() {
            self.dispatch_next(now, sink);
        }

        // ── ⑥ Finish ──────────────────────────────────────────────────────
        if self.active.is_empty() && self.queue.is_empty() {
            self.state = RunState::Finished;
            let late_deliveries = self.store.iter().filter(|p| p.delivered_late()).count();
            let undelivered = self
                .store
                .iter()
                .filter(|p| p.status() != PackageStatus::Delivered)
                .count();
            sink.on_event(&FleetEvent::RunSummary {
                at: now,
                total_miles: self.total_miles(),
                late_deliveries,
                undelivered,
            });
        }

        sink.on_tick_end(now);
    }

    /// Pop the next queued vehicle and send it out.
    ///
    /// The arrival check runs immediately after departure so a trivial
    /// hub→hub route delivers its hub packages at the departure timestamp
    /// with zero miles driven.
    fn dispatch_next<S: EventSink>(&mut self, now: u32, sink: &mut S) {
        let Some(mut vehicle) = self.queue.pop_front() else {
            return;
        };
        vehicle.start_route(now, &mut self.store);
        sink.on_event(&FleetEvent::VehicleDispatched { vehicle: vehicle.id, at: now });

        process_arrivals(&mut vehicle, &mut self.store, &self.graph, now, sink);
        if vehicle.is_finished() {
            sink.on_event(&FleetEvent::RouteCompleted {
                vehicle: vehicle.id,
                at: now,
                miles: vehicle.miles_traveled(),
            });
            self.retired.push(vehicle);
        } else {
            self.active.push(vehicle);
        }
    }
}

// ── Arrival processing ────────────────────────────────────────────────────────

/// Deliver and pop stops while the vehicle has reached its current target.
///
/// A free function over disjoint pieces of engine state so both the tick
/// loop and the dispatch path can share it.  Delivery matching compares the
/// package's *current* destination to the stop's location — a stop whose
/// vertex is missing from the graph matches nothing.
fn process_arrivals<S: EventSink>(
    vehicle: &mut Vehicle,
    store: &mut PackageStore,
    graph: &DistanceGraph,
    now: u32,
    sink: &mut S,
) {
    while vehicle.arrived_at_current_stop() {
        let Some(stop) = vehicle.current_stop().copied() else {
            break;
        };

        if let Some(stop_location) = graph.vertex(stop.node) {
            for package in vehicle.packages().to_vec() {
                let Some(pkg) = store.get_mut(package) else {
                    continue;
                };
                if pkg.destination == *stop_location {
                    pkg.mark_delivered(now);
                    let deadline = pkg.deadline;
                    let late = pkg.delivered_late();
                    vehicle.unload(package);
                    sink.on_event(&FleetEvent::PackageDelivered {
                        package,
                        vehicle: vehicle.id,
                        at: now,
                        deadline,
                        late,
                    });
                }
            }
        }

        if vehicle.pop_next_stop() {
            break;
        }
    }
}
