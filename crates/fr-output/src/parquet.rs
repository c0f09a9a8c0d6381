//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `agent_data.parquet`
//! - `step_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    BooleanBuilder, Float64Builder, StringBuilder, UInt8Builder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AgentStepRow, OutputResult, StepSummaryRow};

fn agent_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",            DataType::UInt64,  false),
        Field::new("agent_id",        DataType::UInt32,  false),
        Field::new("agent_type",      DataType::Utf8,    false),
        Field::new("zone",            DataType::Utf8,    false),
        Field::new("current_zone",    DataType::Utf8,    false),
        Field::new("ses",             DataType::Utf8,    false),
        Field::new("threat_score",    DataType::Float64, false),
        Field::new("coping_score",    DataType::Float64, false),
        Field::new("action",          DataType::Utf8,    true),
        Field::new("influenced",      DataType::Boolean, false),
        Field::new("early_evacuated", DataType::Boolean, false),
        Field::new("social_network",  DataType::UInt8,   true),
        Field::new("longitude",       DataType::Float64, true),
        Field::new("latitude",        DataType::Float64, true),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",             DataType::UInt64,  false),
        Field::new("water_level",      DataType::Float64, false),
        Field::new("threat_triggered", DataType::Boolean, false),
        Field::new("mitigate",         DataType::UInt64,  false),
        Field::new("evacuate",         DataType::UInt64,  false),
        Field::new("do_nothing",       DataType::UInt64,  false),
        Field::new("undecided",        DataType::UInt64,  false),
        Field::new("evacuated",        DataType::UInt64,  false),
        Field::new("flooded",          DataType::UInt64,  false),
        Field::new("damaged",          DataType::UInt64,  false),
        Field::new("influenced",       DataType::UInt64,  false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    agents:       Option<ArrowWriter<File>>,
    summaries:    Option<ArrowWriter<File>>,
    agent_schema: Arc<Schema>,
    summ_schema:  Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let agent_schema = agent_schema();
        let summ_schema = summary_schema();

        let agent_file = File::create(dir.join("agent_data.parquet"))?;
        let agents = ArrowWriter::try_new(
            agent_file,
            Arc::clone(&agent_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("step_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            agents: Some(agents),
            summaries: Some(summaries),
            agent_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_agent_rows(&mut self, rows: &[AgentStepRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.agents.as_mut() else {
            return Ok(());
        };

        let mut steps           = UInt64Builder::new();
        let mut agent_ids       = UInt32Builder::new();
        let mut agent_types     = StringBuilder::new();
        let mut zones           = StringBuilder::new();
        let mut current_zones   = StringBuilder::new();
        let mut ses             = StringBuilder::new();
        let mut threat_scores   = Float64Builder::new();
        let mut coping_scores   = Float64Builder::new();
        let mut actions         = StringBuilder::new();
        let mut influenced      = BooleanBuilder::new();
        let mut early_evacuated = BooleanBuilder::new();
        let mut social_networks = UInt8Builder::new();
        let mut longitudes      = Float64Builder::new();
        let mut latitudes       = Float64Builder::new();

        for row in rows {
            steps.append_value(row.step);
            agent_ids.append_value(row.agent_id);
            agent_types.append_value(&row.agent_type);
            zones.append_value(&row.zone);
            current_zones.append_value(&row.current_zone);
            ses.append_value(row.ses.as_str());
            threat_scores.append_value(row.threat_score);
            coping_scores.append_value(row.coping_score);
            actions.append_option(row.action.map(|a| a.as_str()));
            influenced.append_value(row.influenced);
            early_evacuated.append_value(row.early_evacuated);
            social_networks.append_option(row.social_network);
            longitudes.append_option(row.longitude);
            latitudes.append_option(row.latitude);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.agent_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(agent_ids.finish()),
                Arc::new(agent_types.finish()),
                Arc::new(zones.finish()),
                Arc::new(current_zones.finish()),
                Arc::new(ses.finish()),
                Arc::new(threat_scores.finish()),
                Arc::new(coping_scores.finish()),
                Arc::new(actions.finish()),
                Arc::new(influenced.finish()),
                Arc::new(early_evacuated.finish()),
                Arc::new(social_networks.finish()),
                Arc::new(longitudes.finish()),
                Arc::new(latitudes.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut steps     = UInt64Builder::new();
        let mut water     = Float64Builder::new();
        let mut triggered = BooleanBuilder::new();
        let mut counts: Vec<UInt64Builder> = (0..8).map(|_| UInt64Builder::new()).collect();

        steps.append_value(row.step);
        water.append_value(row.water_level);
        triggered.append_value(row.threat_triggered);
        let values = [
            row.mitigate,
            row.evacuate,
            row.do_nothing,
            row.undecided,
            row.evacuated,
            row.flooded,
            row.damaged,
            row.influenced,
        ];
        for (builder, value) in counts.iter_mut().zip(values) {
            builder.append_value(value);
        }

        let mut columns: Vec<arrow::array::ArrayRef> = vec![
            Arc::new(steps.finish()),
            Arc::new(water.finish()),
            Arc::new(triggered.finish()),
        ];
        columns.extend(counts.iter_mut().map(|b| Arc::new(b.finish()) as arrow::array::ArrayRef));

        let batch = RecordBatch::try_new(Arc::clone(&self.summ_schema), columns)?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.agents.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
