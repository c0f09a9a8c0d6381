//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentStepRow, OutputResult, StepSummaryRow};

/// Trait implemented by CSV, in-memory, SQLite, and Parquet writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one step's worth of household rows.
    fn write_agent_rows(&mut self, rows: &[AgentStepRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
