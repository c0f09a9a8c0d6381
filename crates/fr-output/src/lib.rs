//! `fr-output` — simulation output writers for the flood-response simulation.
//!
//! Four backends are provided, two behind Cargo features:
//!
//! | Feature   | Backend     | Output                                               |
//! |-----------|-------------|------------------------------------------------------|
//! | *(none)*  | CSV         | `agent_data.csv`, `step_summaries.csv`               |
//! | *(none)*  | Memory      | `Vec`s, for tests and post-run summaries             |
//! | `sqlite`  | SQLite      | `output.db`                                          |
//! | `parquet` | Parquet     | `agent_data.parquet`, `step_summaries.parquet`       |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `fr_sim::SimObserver`.
//!
//! The per-agent column order (see [`AGENT_COLUMNS`]) is shared by every
//! backend and is what downstream dashboards read.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fr_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod memory;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use memory::MemoryWriter;
pub use observer::SimOutputObserver;
pub use row::{AGENT_COLUMNS, AgentStepRow, SUMMARY_COLUMNS, StepSummaryRow};
pub use summary::{OutcomeSummary, summarize_outcomes};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use self::parquet::ParquetWriter;
