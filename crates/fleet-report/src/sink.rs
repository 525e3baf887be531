//! `ReportSink<W>` — bridges `EventSink` to a `ReportWriter`.

use fleet_core::DayClock;
use fleet_sim::{EventSink, FleetEvent};

use crate::writer::ReportWriter;
use crate::{DeliveryRow, ReportError, ReportResult, SummaryRow};

/// An [`EventSink`] that records deliveries and the run summary through any
/// [`ReportWriter`] backend.
///
/// Errors from the writer are stored internally because `EventSink` methods
/// have no return value.  After the run completes, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportSink<W: ReportWriter> {
    writer: W,
    /// Start-of-day anchor for wall-clock formatting; never advanced.
    clock: DayClock,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> ReportSink<W> {
    /// Create a sink backed by `writer`, using `clock` for wall-clock
    /// conversion.
    pub fn new(writer: W, clock: DayClock) -> Self {
        Self {
            writer,
            clock,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect buffers after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> EventSink for ReportSink<W> {
    fn on_event(&mut self, event: &FleetEvent) {
        match *event {
            FleetEvent::PackageDelivered {
                package,
                vehicle,
                at,
                deadline,
                late,
            } => {
                let row = DeliveryRow {
                    package: package.0,
                    vehicle: vehicle.0,
                    delivered_secs: at,
                    delivered_clock: self.clock.format(at),
                    deadline_secs: deadline,
                    late,
                };
                let result = self.writer.write_delivery(&row);
                self.store_err(result);
            }

            FleetEvent::RunSummary {
                at,
                total_miles,
                late_deliveries,
                undelivered,
            } => {
                let row = SummaryRow {
                    finished_secs: at,
                    finished_clock: self.clock.format(at),
                    total_miles,
                    late_deliveries: late_deliveries as u64,
                    undelivered: undelivered as u64,
                };
                let result = self.writer.write_summary(&row);
                self.store_err(result);
                let result = self.writer.finish();
                self.store_err(result);
            }

            // Dispatch, correction, and completion notices are for live
            // observers; the report keeps outcomes only.
            _ => {}
        }
    }
}
