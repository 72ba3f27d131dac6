//! Pipeline module - orchestrates the panel construction stages

pub mod builder;
pub mod config;
pub mod dollarization;
pub mod error;
pub mod loader;
pub mod materialize;
pub mod merge;
pub mod standardize;
pub mod typology;

pub use builder::*;
pub use config::*;
pub use dollarization::*;
pub use error::{MergeSide, PanelError};
pub use loader::*;
pub use materialize::*;
pub use merge::*;
pub use standardize::*;
pub use typology::*;

use anyhow::Result;
use polars::prelude::DataFrame;

/// Run every construction stage and return the final, key-verified panel
/// in the documented column order.
///
/// The binary runs the stages one by one for per-step reporting; this is
/// the single-call form used by tests and library consumers.
pub fn build_panel(
    indicators: DataFrame,
    populism: DataFrame,
    cfg: &PipelineConfig,
) -> Result<DataFrame> {
    let panel = build_base_panel(indicators, cfg)?;
    let panel = merge_populism(panel, populism, cfg)?;
    let panel = standardize_within_year(panel)?;
    let panel = assign_typology(panel)?;
    let panel = add_dollarized_flag(panel, cfg)?;
    let panel = order_columns(panel, cfg)?;
    verify_panel_key(&panel)?;
    Ok(panel)
}
