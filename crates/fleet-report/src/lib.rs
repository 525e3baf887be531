//! `fleet-report` — delivery report writers for the `fleetsim` delivery
//! simulator.
//!
//! [`ReportSink`] implements `fleet_sim::EventSink` and forwards delivery
//! and summary events to any [`ReportWriter`] backend.  The CSV backend
//! creates two files:
//!
//! | File              | Contents                                   |
//! |-------------------|--------------------------------------------|
//! | `deliveries.csv`  | one row per delivered package              |
//! | `run_summary.csv` | one row per completed run                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_report::{CsvReporter, ReportSink};
//!
//! let writer = CsvReporter::create(Path::new("./output"))?;
//! let mut sink = ReportSink::new(writer, config.make_clock());
//! sim.run_to(end_of_day, &mut sink);
//! if let Some(e) = sink.take_error() {
//!     eprintln!("report error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod sink;
pub mod writer;


pub use crate::csv::CsvReporter;
pub use error::{ReportError, ReportResult};
pub use row::{DeliveryRow, SummaryRow};
pub use sink::ReportSink;
pub use writer::ReportWriter;
