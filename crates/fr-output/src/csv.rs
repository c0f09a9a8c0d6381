//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_data.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{AGENT_COLUMNS, SUMMARY_COLUMNS};
use crate::writer::OutputWriter;
use crate::{AgentStepRow, OutputResult, StepSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    agents:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agent_data.csv"))?;
        agents.write_record(AGENT_COLUMNS)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_COLUMNS)?;

        Ok(Self {
            agents,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agent_rows(&mut self, rows: &[AgentStepRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(row.to_record())?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(row.to_record())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
