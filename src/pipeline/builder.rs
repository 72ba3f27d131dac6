//! Panel Builder - base panel from the indicator fetcher output
//!
//! Filters the raw fetcher table to the target region and year window,
//! renames source indicator codes to mnemonic field names, computes the
//! time-trend terms, sorts by (country_code, year), and assigns a stable
//! integer id per country.

use anyhow::Result;
use polars::prelude::*;
use std::collections::BTreeSet;

use super::config::PipelineConfig;
use super::loader::{require_columns, require_non_null};

/// Build the base panel from the wide indicator table.
///
/// The input must carry `country_code`, `country_name`, `region`, `year`
/// and one column per source indicator code in the rename table; a missing
/// column is a fatal configuration error. Columns outside this schema are
/// dropped.
pub fn build_base_panel(raw: DataFrame, cfg: &PipelineConfig) -> Result<DataFrame> {
    let mut required: Vec<String> = ["country_code", "country_name", "region", "year"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    required.extend(cfg.indicator_source_codes());
    require_columns(&raw, "indicator", &required)?;
    require_non_null(&raw, "indicator", "country_code")?;
    require_non_null(&raw, "indicator", "year")?;

    let mut df = raw
        .lazy()
        .with_column(col("year").cast(DataType::Int32))
        .filter(col("region").eq(lit(cfg.region.clone())))
        .filter(col("year").gt_eq(lit(cfg.min_year)))
        .collect()?;

    // Static 1:1 rename; presence was verified above.
    for (code, field) in &cfg.indicator_renames {
        df.rename(code, field.as_str().into())?;
    }
    // polars 0.46's DataFrame::rename leaves a stale cached schema that
    // lazy() would otherwise pick up, hiding the renamed columns.
    df.clear_schema();

    let mut keep: Vec<Expr> = vec![col("country_code"), col("country_name"), col("year")];
    for field in cfg.indicator_fields() {
        keep.push(col(field.as_str()).cast(DataType::Float64));
    }

    let trend = col("year") - lit(cfg.base_year);
    let df = df
        .lazy()
        .select(keep)
        .with_columns([
            trend.clone().cast(DataType::Int32).alias("time_trend"),
            (trend.clone() * trend)
                .cast(DataType::Int32)
                .alias("time_trend2"),
        ])
        .collect()?;

    // Sort after the id join; join output order is not guaranteed.
    let df = assign_country_ids(df)?;
    let df = df
        .lazy()
        .sort(["country_code", "year"], SortMultipleOptions::default())
        .collect()?;
    Ok(df)
}

/// Assign `country_id` as the alphabetical rank (from 1) of each distinct
/// `country_code`.
///
/// The specific mapping carries no meaning; downstream code relies only on
/// it being a deterministic bijection over the panel's country set.
fn assign_country_ids(df: DataFrame) -> Result<DataFrame> {
    let mut codes: BTreeSet<String> = BTreeSet::new();
    for code in df.column("country_code")?.str()?.into_iter().flatten() {
        codes.insert(code.to_string());
    }

    let codes: Vec<String> = codes.into_iter().collect();
    let ids: Vec<i32> = (1..=codes.len() as i32).collect();
    let mapping = df!(
        "country_code" => &codes,
        "country_id" => &ids,
    )?;

    let out = df
        .lazy()
        .join(
            mapping.lazy(),
            [col("country_code")],
            [col("country_code")],
            JoinArgs::new(JoinType::Left),
        )
        .collect()?;
    Ok(out)
}
