//! Structured run events and the sink interface that observes them.

use fleet_core::{PackageId, VehicleId};

// ── FleetEvent ────────────────────────────────────────────────────────────────

/// Everything the engine reports.  `at` is always elapsed seconds since the
/// start of day; rendering (wall-clock strings, CSV, stdout) is the sink's
/// business — the core assumes none.
#[derive(Clone, PartialEq, Debug)]
pub enum FleetEvent {
    /// A vehicle left the hub.
    VehicleDispatched { vehicle: VehicleId, at: u32 },

    /// The scheduled destination rewrite landed.
    AddressCorrected { package: PackageId, at: u32 },

    /// A package reached its destination.
    PackageDelivered {
        package: PackageId,
        vehicle: VehicleId,
        at: u32,
        deadline: u32,
        late: bool,
    },

    /// A vehicle exhausted its route and returned to the hub.
    RouteCompleted { vehicle: VehicleId, at: u32, miles: f64 },

    /// The run reached `Finished`.
    RunSummary {
        at: u32,
        total_miles: f64,
        late_deliveries: usize,
        undelivered: usize,
    },
}

impl FleetEvent {
    /// Stable kind label, useful as a CSV column value.
    pub fn kind(&self) -> &'static str {
        match self {
            FleetEvent::VehicleDispatched { .. } => "vehicle_dispatched",
            FleetEvent::AddressCorrected { .. } => "address_corrected",
            FleetEvent::PackageDelivered { .. } => "package_delivered",
            FleetEvent::RouteCompleted { .. } => "route_completed",
            FleetEvent::RunSummary { .. } => "run_summary",
        }
    }

    /// Elapsed second the event fired at.
    pub fn at(&self) -> u32 {
        match *self {
            FleetEvent::VehicleDispatched { at, .. }
            | FleetEvent::AddressCorrected { at, .. }
            | FleetEvent::PackageDelivered { at, .. }
            | FleetEvent::RouteCompleted { at, .. }
            | FleetEvent::RunSummary { at, .. } => at,
        }
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Callbacks invoked by the engine at fixed points in the tick loop.
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl EventSink for DeliveryPrinter {
///     fn on_event(&mut self, event: &FleetEvent) {
///         if let FleetEvent::PackageDelivered { package, at, .. } = event {
///             println!("t+{at}s delivered {package}");
///         }
///     }
/// }
/// ```
pub trait EventSink {
    /// Called synchronously for every event, in tick-contract order.
    fn on_event(&mut self, _event: &FleetEvent) {}

    /// Called once at the end of every processed tick.
    fn on_tick_end(&mut self, _now: u32) {}
}

/// An [`EventSink`] that does nothing.  Use when you need to run the engine
/// but don't care about callbacks.
pub struct NoopSink;

impl EventSink for NoopSink {}
