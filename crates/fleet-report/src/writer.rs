//! The `ReportWriter` trait implemented by all backend writers.

use crate::{DeliveryRow, ReportResult, SummaryRow};

/// Trait implemented by report backends.
///
/// All methods are infallible from the sink's perspective — errors are
/// stored internally by [`ReportSink`][crate::ReportSink] and retrieved
/// with `take_error`.
pub trait ReportWriter {
    /// Write one delivery row.
    fn write_delivery(&mut self, row: &DeliveryRow) -> ReportResult<()>;

    /// Write the end-of-run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
