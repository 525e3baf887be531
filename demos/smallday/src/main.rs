//! smallday — smallest end-to-end example for the fleetsim delivery
//! simulator.
//!
//! Loads an inline fourteen-package scenario, runs the constraint passes,
//! builds nearest-neighbor routes, then simulates the day tick-by-tick,
//! narrating events to stdout and writing `deliveries.csv` /
//! `run_summary.csv` to `./output`.

mod data;

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use fleet_core::{AddressCorrection, DayClock, FleetConfig, Location, PackageId};
use fleet_dispatch::{assign_packages, build_fleet, load_distances_reader, load_packages_reader};
use fleet_report::{CsvReporter, ReportSink};
use fleet_sim::{EventSink, FleetEvent, SimulationBuilder};

use data::{DISTANCE_CSV, PACKAGE_CSV};

// ── Scenario constants ────────────────────────────────────────────────────────

/// The correction for package 9 lands at 9:30 AM.
const CORRECTION_SECS: u32 = 90 * 60;
const OUTPUT_DIR: &str = "output";

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Prints every event with a wall-clock prefix.
struct ConsoleSink {
    clock: DayClock,
}

impl EventSink for ConsoleSink {
    fn on_event(&mut self, event: &FleetEvent) {
        let at = self.clock.format(event.at());
        match *event {
            FleetEvent::VehicleDispatched { vehicle, .. } => {
                println!("[{at}] {vehicle} left the hub");
            }
            FleetEvent::AddressCorrected { package, .. } => {
                println!("[{at}] corrected address for {package}");
            }
            FleetEvent::PackageDelivered { package, vehicle, late, .. } => {
                let flag = if late { " LATE" } else { "" };
                println!("[{at}] {vehicle} delivered {package}{flag}");
            }
            FleetEvent::RouteCompleted { vehicle, miles, .. } => {
                println!("[{at}] {vehicle} back at the hub after {miles:.1} mi");
            }
            FleetEvent::RunSummary { total_miles, late_deliveries, undelivered, .. } => {
                println!(
                    "[{at}] day complete: {total_miles:.1} mi, {late_deliveries} late, \
                     {undelivered} undelivered"
                );
            }
        }
    }
}

/// Forwards every callback to both wrapped sinks.
struct Tee<A: EventSink, B: EventSink>(A, B);

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn on_event(&mut self, event: &FleetEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
    fn on_tick_end(&mut self, now: u32) {
        self.0.on_tick_end(now);
        self.1.on_tick_end(now);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = FleetConfig::standard();
    let clock = config.make_clock();

    // ── Load ──────────────────────────────────────────────────────────────
    let mut store = load_packages_reader(Cursor::new(PACKAGE_CSV), &config)?;
    let graph = load_distances_reader(Cursor::new(DISTANCE_CSV))?;
    println!(
        "loaded {} packages over {} locations",
        store.len(),
        graph.len()
    );

    let correction = AddressCorrection {
        package: PackageId(9),
        new_destination: Location::new("410 S State St", "Salt Lake City", "UT", "84111"),
        at_secs: CORRECTION_SECS,
    };

    // ── Assign and route ──────────────────────────────────────────────────
    let mut vehicles = build_fleet(&config);
    assign_packages(&mut store, &mut vehicles, &config, Some(&correction))?;

    for vehicle in &mut vehicles {
        vehicle.build_route(&graph, &store);
        let stops = vehicle.route().len().saturating_sub(2);
        let miles = vehicle
            .route()
            .last()
            .map(|s| s.cumulative_miles)
            .unwrap_or(0.0);
        println!(
            "{}: {} packages, {stops} stops, {miles:.1} mi planned",
            vehicle.id,
            vehicle.package_count()
        );
    }

    // ── Simulate ──────────────────────────────────────────────────────────
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let reporter = CsvReporter::create(Path::new(OUTPUT_DIR))?;
    let mut sink = Tee(ConsoleSink { clock }, ReportSink::new(reporter, clock));

    let mut sim = SimulationBuilder::new(config.clone(), store, graph, vehicles)
        .correction(correction)
        .build()?;
    sim.run_to(config.end_of_day_secs(), &mut sink);

    if let Some(e) = sink.1.take_error() {
        eprintln!("report error: {e}");
    }
    println!(
        "finished at {} with {:.1} fleet miles — reports in ./{OUTPUT_DIR}",
        clock.format(sim.now()),
        sim.total_miles()
    );
    Ok(())
}
