//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `deliveries.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{DeliveryRow, ReportResult, SummaryRow};

/// Writes delivery reports to two CSV streams.
///
/// Generic over the underlying `Write` so tests can drive it with in-memory
/// buffers; applications use [`create`](CsvReporter::create).
pub struct CsvReporter<W: Write> {
    deliveries: Writer<W>,
    summaries: Writer<W>,
    finished: bool,
}

impl CsvReporter<File> {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn create(dir: &Path) -> ReportResult<Self> {
        Self::from_writers(
            File::create(dir.join("deliveries.csv"))?,
            File::create(dir.join("run_summary.csv"))?,
        )
    }
}

impl<W: Write> CsvReporter<W> {
    /// Wrap two write targets and emit the header rows.
    pub fn from_writers(deliveries: W, summaries: W) -> ReportResult<Self> {
        let mut deliveries = Writer::from_writer(deliveries);
        deliveries.write_record([
            "package",
            "vehicle",
            "delivered_secs",
            "delivered_clock",
            "deadline_secs",
            "late",
        ])?;

        let mut summaries = Writer::from_writer(summaries);
        summaries.write_record([
            "finished_secs",
            "finished_clock",
            "total_miles",
            "late_deliveries",
            "undelivered",
        ])?;

        Ok(Self {
            deliveries,
            summaries,
            finished: false,
        })
    }

    /// Flush and unwrap the inner write targets (for tests).
    pub fn into_writers(mut self) -> ReportResult<(W, W)> {
        self.finish()?;
        let deliveries = self.deliveries.into_inner().map_err(|e| e.into_error())?;
        let summaries = self.summaries.into_inner().map_err(|e| e.into_error())?;
        Ok((deliveries, summaries))
    }
}

impl<W: Write> ReportWriter for CsvReporter<W> {
    fn write_delivery(&mut self, row: &DeliveryRow) -> ReportResult<()> {
        self.deliveries.write_record(&[
            row.package.to_string(),
            row.vehicle.to_string(),
            row.delivered_secs.to_string(),
            row.delivered_clock.clone(),
            row.deadline_secs.to_string(),
            (row.late as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> ReportResult<()> {
        self.summaries.write_record(&[
            row.finished_secs.to_string(),
            row.finished_clock.clone(),
            format!("{:.1}", row.total_miles),
            row.late_deliveries.to_string(),
            row.undelivered.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
