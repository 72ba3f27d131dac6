//! Panel Materializer - key verification and artifact export
//!
//! Declares the panel key as (country_id, year), verifies it is unique,
//! reorders the columns to the documented output order, and writes the
//! panel as Parquet plus a flat CSV export with identical content.
//! Nothing is written if any upstream stage failed; a non-unique key here
//! means a join produced duplicate rows and is fatal.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use super::config::PipelineConfig;
use super::error::PanelError;

/// Verify that (country_id, year) uniquely identifies every row.
pub fn verify_panel_key(df: &DataFrame) -> Result<()> {
    let ids = df.column("country_id")?.i32()?;
    let years = df.column("year")?.i32()?;

    let mut counts: HashMap<(i32, i32), usize> = HashMap::new();
    for (id, year) in ids.into_iter().zip(years.into_iter()) {
        if let (Some(id), Some(year)) = (id, year) {
            *counts.entry((id, year)).or_insert(0) += 1;
        }
    }

    let mut duplicates: Vec<(i32, i32)> = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(key, _)| *key)
        .collect();
    if !duplicates.is_empty() {
        duplicates.sort();
        return Err(PanelError::NonUniquePanelKey { keys: duplicates }.into());
    }
    Ok(())
}

/// Reorder the panel columns to the documented output order.
pub fn order_columns(df: DataFrame, cfg: &PipelineConfig) -> Result<DataFrame> {
    let out = df.select(cfg.output_columns())?;
    Ok(out)
}

/// Write the final panel as Parquet and as a flat CSV export.
///
/// The caller is expected to have run `verify_panel_key` and
/// `order_columns` first (the pipeline orchestrator does both).
pub fn write_artifacts(df: &DataFrame, parquet_path: &Path, csv_path: &Path) -> Result<()> {
    let mut df = df.clone();

    let file = std::fs::File::create(parquet_path)
        .with_context(|| format!("Failed to create output file: {}", parquet_path.display()))?;
    ParquetWriter::new(file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write Parquet file: {}", parquet_path.display()))?;

    let mut file = std::fs::File::create(csv_path)
        .with_context(|| format!("Failed to create output file: {}", csv_path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", csv_path.display()))?;

    Ok(())
}
