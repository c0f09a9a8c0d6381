//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `agent_data` and `step_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentStepRow, OutputResult, StepSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_data (
                 step            INTEGER NOT NULL,
                 agent_id        INTEGER NOT NULL,
                 agent_type      TEXT    NOT NULL,
                 zone            TEXT    NOT NULL,
                 current_zone    TEXT    NOT NULL,
                 ses             TEXT    NOT NULL,
                 threat_score    REAL    NOT NULL,
                 coping_score    REAL    NOT NULL,
                 action          TEXT,
                 influenced      INTEGER NOT NULL,
                 early_evacuated INTEGER NOT NULL,
                 social_network  INTEGER,
                 longitude       REAL,
                 latitude        REAL,
                 PRIMARY KEY (step, agent_id)
             );
             CREATE TABLE IF NOT EXISTS step_summaries (
                 step             INTEGER PRIMARY KEY,
                 water_level      REAL    NOT NULL,
                 threat_triggered INTEGER NOT NULL,
                 mitigate         INTEGER NOT NULL,
                 evacuate         INTEGER NOT NULL,
                 do_nothing       INTEGER NOT NULL,
                 undecided        INTEGER NOT NULL,
                 evacuated        INTEGER NOT NULL,
                 flooded          INTEGER NOT NULL,
                 damaged          INTEGER NOT NULL,
                 influenced       INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_agent_rows(&mut self, rows: &[AgentStepRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_data \
                 (step, agent_id, agent_type, zone, current_zone, ses, threat_score, \
                  coping_score, action, influenced, early_evacuated, social_network, \
                  longitude, latitude) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.agent_id,
                    row.agent_type,
                    row.zone,
                    row.current_zone,
                    row.ses.as_str(),
                    row.threat_score,
                    row.coping_score,
                    row.action.map(|a| a.as_str()),
                    row.influenced as i64,
                    row.early_evacuated as i64,
                    row.social_network,
                    row.longitude,
                    row.latitude,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO step_summaries \
             (step, water_level, threat_triggered, mitigate, evacuate, do_nothing, \
              undecided, evacuated, flooded, damaged, influenced) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                row.step,
                row.water_level,
                row.threat_triggered as i64,
                row.mitigate,
                row.evacuate,
                row.do_nothing,
                row.undecided,
                row.evacuated,
                row.flooded,
                row.damaged,
                row.influenced,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
