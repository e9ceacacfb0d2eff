use crate::domain::model::{AggregateResult, GroupKey, GroupSummary};
use crate::utils::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const SUMMARY_HEADER: [&str; 3] = ["neighbourhood_group", "room_type", "average_price"];

/// Writes the summary CSV, replacing any existing file.
///
/// The header is always written, so an empty result produces a header-only file.
/// Rows follow [`AggregateResult::iter`] order: neighbourhood group, then room type.
pub fn write_summary<P: AsRef<Path>>(path: P, result: &AggregateResult) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_summary_to(file, result)?;

    tracing::info!("Wrote {} summary rows to {}", result.len(), path.display());
    Ok(())
}

pub fn write_summary_to<W: Write>(output: W, result: &AggregateResult) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(SUMMARY_HEADER)?;
    for row in result.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[derive(Serialize)]
struct JsonSummaryRow<'a> {
    #[serde(flatten)]
    key: &'a GroupKey,
    #[serde(flatten)]
    summary: &'a GroupSummary,
}

/// Writes the summary as a pretty-printed JSON array, including per-group listing counts.
pub fn write_summary_json<P: AsRef<Path>>(path: P, result: &AggregateResult) -> Result<()> {
    let path = path.as_ref();
    let rows: Vec<JsonSummaryRow> = result
        .iter()
        .map(|(key, summary)| JsonSummaryRow { key, summary })
        .collect();

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.flush()?;

    tracing::info!("Wrote JSON summary to {}", path.display());
    Ok(())
}
