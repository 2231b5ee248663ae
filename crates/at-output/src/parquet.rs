//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.parquet`
//! - `tick_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("agent_id", DataType::UInt32, false),
        Field::new("tick",     DataType::UInt64, false),
        Field::new("kind",     DataType::Utf8,   false),
        Field::new("x",        DataType::UInt32, false),
        Field::new("y",        DataType::UInt32, false),
        Field::new("state",    DataType::Utf8,   true),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",           DataType::UInt64, false),
        Field::new("day",            DataType::UInt32, false),
        Field::new("time",           DataType::UInt32, false),
        Field::new("agent_count",    DataType::UInt64, false),
        Field::new("flying",         DataType::UInt64, false),
        Field::new("at_airport",     DataType::UInt64, false),
        Field::new("runways_in_use", DataType::UInt64, false),
        Field::new("takeoffs",       DataType::UInt64, false),
        Field::new("landings",       DataType::UInt64, false),
        Field::new("stuck",          DataType::UInt64, false),
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
    snapshots:   Option<ArrowWriter<File>>,
    summaries:   Option<ArrowWriter<File>>,
    snap_schema: Arc<Schema>,
    summ_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let snap_schema = snapshot_schema();
        let summ_schema = summary_schema();

        let snap_file = File::create(dir.join("agent_snapshots.parquet"))?;
        let snapshots = ArrowWriter::try_new(snap_file, Arc::clone(&snap_schema), Some(snappy_props()))?;

        let summ_file = File::create(dir.join("tick_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(summ_file, Arc::clone(&summ_schema), Some(snappy_props()))?;

        Ok(Self {
            snapshots: Some(snapshots),
            summaries: Some(summaries),
            snap_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut agent_ids = UInt32Builder::new();
        let mut ticks     = UInt64Builder::new();
        let mut kinds     = StringBuilder::new();
        let mut xs        = UInt32Builder::new();
        let mut ys        = UInt32Builder::new();
        let mut states    = StringBuilder::new();

        for row in rows {
            agent_ids.append_value(row.agent_id);
            ticks.append_value(row.tick);
            kinds.append_value(row.kind.as_str());
            xs.append_value(row.x);
            ys.append_value(row.y);
            states.append_option(row.state.map(|s| s.as_str()));
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(agent_ids.finish()),
                Arc::new(ticks.finish()),
                Arc::new(kinds.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(states.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let u64_col = |v: u64| -> ArrayRef {
            let mut b = UInt64Builder::new();
            b.append_value(v);
            Arc::new(b.finish())
        };
        let u32_col = |v: u32| -> ArrayRef {
            let mut b = UInt32Builder::new();
            b.append_value(v);
            Arc::new(b.finish())
        };

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                u64_col(row.tick),
                u32_col(row.day),
                u32_col(row.time),
                u64_col(row.agent_count),
                u64_col(row.flying),
                u64_col(row.at_airport),
                u64_col(row.runways_in_use),
                u64_col(row.takeoffs),
                u64_col(row.landings),
                u64_col(row.stuck),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.snapshots.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
