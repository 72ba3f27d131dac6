//! Input table loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::error::PanelError;

/// Load an input table from a file (CSV or Parquet based on extension).
pub fn load_table(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(infer)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
            .collect()
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?
            .collect()
            .with_context(|| format!("Failed to read Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    Ok(df)
}

/// Verify that every named column is present in the table.
///
/// A missing column is a configuration error and aborts the run before any
/// output is produced.
pub fn require_columns(df: &DataFrame, table: &'static str, columns: &[String]) -> Result<()> {
    let present: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for column in columns {
        if !present.contains(column) {
            return Err(PanelError::MissingColumn {
                table,
                column: column.clone(),
            }
            .into());
        }
    }
    Ok(())
}

/// Verify that a key column has no nulls.
pub fn require_non_null(df: &DataFrame, table: &'static str, column: &str) -> Result<()> {
    let count = df.column(column)?.null_count();
    if count > 0 {
        return Err(PanelError::NullKey {
            table,
            column: column.to_string(),
            count,
        }
        .into());
    }
    Ok(())
}
