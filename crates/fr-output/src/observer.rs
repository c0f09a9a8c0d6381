//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use fr_agent::HouseholdStore;
use fr_core::Step;
use fr_sim::{SimObserver, StepSummary};

use crate::row::{AgentStepRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes household rows and step summaries to any
/// [`OutputWriter`] backend (CSV, memory, SQLite, Parquet).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect rows after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the writer.  `run` does this on its own; call it after driving
    /// the simulation with `step`/`run_steps`.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, summary: &StepSummary) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, households: &HouseholdStore) {
        let rows: Vec<AgentStepRow> = households
            .iter()
            .map(|h| AgentStepRow::from_household(step.0, h))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_agent_rows(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        self.finish();
    }
}
