//! `fleet-sim` — tick-loop orchestrator for the `fleetsim` delivery
//! simulator.
//!
//! # The tick contract
//!
//! ```text
//! for each requested tick (1 tick = 1 simulated second):
//!   ① Clock      — advance by one second.
//!   ② Correction — latch the scheduled address rewrite if its time has
//!                  come (idempotent; runs before any delivery matching).
//!   ③ Vehicles   — for each active vehicle in insertion order: advance,
//!                  deliver at reached stops, retire on route exhaustion.
//!   ④ Wave       — at the delayed-cargo time, mark the wave departed and
//!                  dispatch the next queued vehicle.
//!   ⑤ Backfill   — once the wave has departed, keep at most two vehicles
//!                  in the field by dispatching from the queue.
//!   ⑥ Finish     — with nothing active and nothing queued, emit the run
//!                  summary and stop.
//! ```
//!
//! Event emission is synchronous and in exactly this order — tests may rely
//! on it.  The engine is strictly single-threaded; suspension happens only
//! between [`Simulation::run_to`] / [`Simulation::run_for`] calls, never
//! inside a tick.

pub mod builder;
pub mod engine;
pub mod error;
pub mod events;


pub use builder::SimulationBuilder;
pub use engine::{RunState, Simulation};
pub use error::{SimError, SimResult};
pub use events::{EventSink, FleetEvent, NoopSink};
