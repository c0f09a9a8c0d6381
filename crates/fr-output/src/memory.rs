//! In-memory output backend.

use crate::writer::OutputWriter;
use crate::{AgentStepRow, OutcomeSummary, OutputResult, StepSummaryRow, summarize_outcomes};

/// Keeps every row in memory.  Useful for tests and for summarising a run
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub agent_rows:   Vec<AgentStepRow>,
    pub summary_rows: Vec<StepSummaryRow>,
    pub finished:     bool,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action counts at the latest recorded step.
    pub fn outcome_summary(&self) -> Option<OutcomeSummary> {
        summarize_outcomes(&self.agent_rows)
    }

    /// Rows recorded for `step`.
    pub fn rows_at(&self, step: u64) -> impl Iterator<Item = &AgentStepRow> + '_ {
        self.agent_rows.iter().filter(move |r| r.step == step)
    }
}

impl OutputWriter for MemoryWriter {
    fn write_agent_rows(&mut self, rows: &[AgentStepRow]) -> OutputResult<()> {
        self.agent_rows.extend_from_slice(rows);
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summary_rows.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
