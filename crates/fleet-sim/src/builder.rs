//! Fluent builder for constructing a [`Simulation`].

use fleet_core::{AddressCorrection, FleetConfig};
use fleet_graph::DistanceGraph;
use fleet_store::PackageStore;
use fleet_vehicle::Vehicle;

use crate::engine::Simulation;
use crate::error::{SimError, SimResult};

/// Validates run inputs and assembles a ready-to-run [`Simulation`].
///
/// # Required inputs
///
/// - [`FleetConfig`] — day window, speed, dispatch policy constants
/// - [`PackageStore`] — the exclusively-owned package state
/// - [`DistanceGraph`] — the fixed mileage matrix
/// - vehicles in departure-priority order, loaded and with routes built
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(config, store, graph, vehicles)
///     .correction(correction)
///     .build()?;
/// sim.run_to(9 * 3_600, &mut NoopSink);
/// ```
pub struct SimulationBuilder {
    config: FleetConfig,
    store: PackageStore,
    graph: DistanceGraph,
    vehicles: Vec<Vehicle>,
    correction: Option<AddressCorrection>,
}

impl SimulationBuilder {
    pub fn new(
        config: FleetConfig,
        store: PackageStore,
        graph: DistanceGraph,
        vehicles: Vec<Vehicle>,
    ) -> Self {
        Self {
            config,
            store,
            graph,
            vehicles,
            correction: None,
        }
    }

    /// Schedule the mid-run address correction.
    pub fn correction(mut self, correction: AddressCorrection) -> Self {
        self.correction = Some(correction);
        self
    }

    /// Validate inputs and build the engine.
    ///
    /// Rejects an empty fleet, a loaded vehicle with no route, and a
    /// correction targeting a package the store does not hold.
    pub fn build(self) -> SimResult<Simulation> {
        if self.vehicles.is_empty() {
            return Err(SimError::EmptyFleet);
        }
        for vehicle in &self.vehicles {
            if vehicle.package_count() > 0 && !vehicle.has_route() {
                return Err(SimError::MissingRoute(vehicle.id));
            }
        }
        if let Some(correction) = &self.correction {
            if self.store.get(correction.package).is_none() {
                return Err(SimError::UnknownPackage(correction.package));
            }
        }

        Ok(Simulation::new(
            self.config,
            self.store,
            self.graph,
            self.vehicles,
            self.correction,
        ))
    }
}
