//! CSV ingestion for package and distance-table data.
//!
//! # Package CSV format
//!
//! One row per package, headered:
//!
//! ```csv
//! id,street,city,state,zip,deadline,weight_kg,instructions
//! 1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,9.5,
//! 3,233 Canyon Rd,Salt Lake City,UT,84103,EOD,0.9,Must be on vehicle 2
//! ```
//!
//! `deadline` is a wall-clock string or the literal `EOD` (end of day).
//! `instructions` parses into [`SpecialHandling`] at load time; unrecognized
//! text is not an error.
//!
//! # Distance-table CSV format
//!
//! One row per location, headerless and lower-triangular: row *i* carries
//! `name,street,city,state,zip` followed by the mileages to rows `0..=i`
//! (the final value is the zero self-distance).  Row 0 is the depot hub.
//!
//! ```csv
//! Hub,4001 S 700 E,Salt Lake City,UT,84107,0
//! Clinic,195 W Oakland Ave,Salt Lake City,UT,84115,3.5,0
//! Courthouse,410 S State St,Salt Lake City,UT,84111,6.4,4.1,0
//! ```
//!
//! Both loaders accept any `Read` source, so tests can pass a
//! `std::io::Cursor` and applications a file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fleet_core::{FleetConfig, Location, NodeId, Package, PackageId, SpecialHandling};
use fleet_graph::DistanceGraph;
use fleet_store::PackageStore;

use crate::error::{DispatchError, DispatchResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PackageRecord {
    id: u32,
    street: String,
    city: String,
    state: String,
    zip: String,
    deadline: String,
    weight_kg: f32,
    instructions: String,
}

// ── Package loader ────────────────────────────────────────────────────────────

/// Load a [`PackageStore`] from a package CSV file.
pub fn load_packages_csv(path: &Path, config: &FleetConfig) -> DispatchResult<PackageStore> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_packages_reader(file, config)
}

/// Like [`load_packages_csv`] but accepts any `Read` source.
pub fn load_packages_reader<R: Read>(
    reader: R,
    config: &FleetConfig,
) -> DispatchResult<PackageStore> {
    let clock = config.make_clock();
    let end_of_day = config.end_of_day_secs();

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut store = PackageStore::with_capacity(64);

    for result in csv_reader.deserialize::<PackageRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;

        let deadline = if row.deadline.trim().eq_ignore_ascii_case("eod") {
            end_of_day
        } else {
            clock
                .parse(&row.deadline)
                .map_err(|e| DispatchError::Parse(format!("package {}: {e}", row.id)))?
        };

        let destination = Location::new(&row.street, &row.city, &row.state, &row.zip);
        let handling = SpecialHandling::parse(&row.instructions, &clock);

        store.insert(Package::new(
            PackageId(row.id),
            destination,
            deadline,
            row.weight_kg,
            handling,
        ));
    }

    Ok(store)
}

// ── Distance-table loader ─────────────────────────────────────────────────────

/// Load a [`DistanceGraph`] from a distance-table CSV file.
pub fn load_distances_csv(path: &Path) -> DispatchResult<DistanceGraph> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_distances_reader(file)
}

/// Like [`load_distances_csv`] but accepts any `Read` source.
pub fn load_distances_reader<R: Read>(reader: R) -> DispatchResult<DistanceGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // rows lengthen as the triangle grows
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = DistanceGraph::new();

    for (i, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        if record.len() < 5 {
            return Err(DispatchError::Parse(format!(
                "distance row {i}: expected name,street,city,state,zip followed by mileages"
            )));
        }

        let location =
            Location::new(&record[1], &record[2], &record[3], &record[4]).named(&record[0]);
        let node = graph.add_vertex(location);

        for (j, field) in record.iter().skip(5).enumerate() {
            if field.is_empty() {
                continue;
            }
            let miles: f64 = field.parse().map_err(|_| {
                DispatchError::Parse(format!("distance row {i}, column {j}: bad mileage {field:?}"))
            })?;
            graph.add_edge_ids(node, NodeId(j as u32), miles);
        }
    }

    Ok(graph)
}
