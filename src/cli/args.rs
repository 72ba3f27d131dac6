//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::PipelineConfig;

/// Popanel - build a Latin American populism panel from World Bank indicators
#[derive(Parser, Debug)]
#[command(name = "popanel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wide indicator table from the World Bank fetcher (CSV or Parquet)
    #[arg(short, long)]
    pub indicators: PathBuf,

    /// Populism-index table keyed by (country_code, year) (CSV or Parquet)
    #[arg(short, long)]
    pub populism: PathBuf,

    /// Output path for the materialized panel (must end in .parquet)
    #[arg(short, long, default_value = "panel.parquet")]
    pub output: PathBuf,

    /// Path for the flat CSV export.
    /// Defaults to the output path with a .csv extension.
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Optional path for a JSON build report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// World Bank region code the panel is restricted to
    #[arg(long, default_value = "LCN")]
    pub region: String,

    /// Lower bound (inclusive) of the analysis year window
    #[arg(long, default_value = "2002")]
    pub min_year: i32,

    /// Year subtracted from `year` to form the time trend
    #[arg(long, default_value = "2002")]
    pub base_year: i32,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Skip the overwrite confirmation prompt
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

impl Cli {
    /// The CSV export path, derived from the output path if not given.
    pub fn csv_output_path(&self) -> PathBuf {
        self.csv_output
            .clone()
            .unwrap_or_else(|| self.output.with_extension("csv"))
    }

    /// Build the pipeline configuration: static tables plus the
    /// CLI-adjustable region and year window.
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            region: self.region.clone(),
            min_year: self.min_year,
            base_year: self.base_year,
            ..PipelineConfig::default()
        }
    }
}
