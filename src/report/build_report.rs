//! JSON build report
//!
//! A machine-readable record of a panel build: when it ran, which inputs
//! and configuration it used, and what the materialized panel contains.
//! Downstream estimation code reads the panel itself; the report exists
//! for provenance.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::DataFrame;
use serde::Serialize;

use crate::pipeline::PipelineConfig;
use crate::report::{PanelSummary, QuadrantCounts};

/// Complete build report, serialized as pretty JSON.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub generated_at: String,
    pub indicators_path: String,
    pub populism_path: String,
    pub region: String,
    pub min_year: i32,
    pub base_year: i32,
    pub rows: usize,
    pub countries: usize,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub quadrants: QuadrantCounts,
    pub dollarized_rows: usize,
    pub columns: Vec<String>,
}

impl BuildReport {
    pub fn new(
        summary: &PanelSummary,
        panel: &DataFrame,
        cfg: &PipelineConfig,
        indicators_path: &Path,
        populism_path: &Path,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            indicators_path: indicators_path.display().to_string(),
            populism_path: populism_path.display().to_string(),
            region: cfg.region.clone(),
            min_year: cfg.min_year,
            base_year: cfg.base_year,
            rows: summary.rows,
            countries: summary.countries,
            year_min: summary.year_min,
            year_max: summary.year_max,
            quadrants: summary.quadrants.clone(),
            dollarized_rows: summary.dollarized_rows,
            columns: panel
                .get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize build report")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write build report: {}", path.display()))?;
        Ok(())
    }
}
