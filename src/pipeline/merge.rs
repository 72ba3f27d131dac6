//! Populism Merger - 1:1 join of the populism-index table onto the panel
//!
//! The join contract is strict: within the panel's country set and year
//! set, every key must match exactly once on both sides. Duplicate or
//! unmatched keys abort the run with the offending keys listed; they are
//! never silently dropped or deduplicated. Populism rows outside the
//! panel's scope (baseline years, non-region countries) are expected and
//! ignored.

use anyhow::Result;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

use super::config::PipelineConfig;
use super::error::{MergeSide, PanelError};
use super::loader::{require_columns, require_non_null};

/// Merge the populism-index table onto the base panel.
///
/// Keeps only the configured populism fields (metadata columns are
/// dropped), applies the manual cell overrides, and drops the baseline
/// year if it survived into the merged panel.
pub fn merge_populism(
    panel: DataFrame,
    populism: DataFrame,
    cfg: &PipelineConfig,
) -> Result<DataFrame> {
    let mut required: Vec<String> = ["country_code", "year"].iter().map(|c| c.to_string()).collect();
    required.extend(cfg.populism_fields.iter().cloned());
    require_columns(&populism, "populism", &required)?;
    require_non_null(&populism, "populism", "country_code")?;
    require_non_null(&populism, "populism", "year")?;

    let populism = populism
        .lazy()
        .with_column(col("year").cast(DataType::Int32))
        .collect()?;

    check_join_contract(&panel, &populism)?;

    let mut right_cols: Vec<Expr> = vec![col("country_code"), col("year")];
    for field in &cfg.populism_fields {
        right_cols.push(col(field.as_str()).cast(DataType::Float64));
    }

    let panel_height = panel.height();
    let baseline_rows = panel_year_count(&panel, cfg.baseline_year)?;
    let mut lf = panel.lazy().join(
        populism.lazy().select(right_cols),
        [col("country_code"), col("year")],
        [col("country_code"), col("year")],
        JoinArgs::new(JoinType::Left),
    );

    for ov in &cfg.overrides {
        lf = lf.with_column(
            when(
                col("country_code")
                    .eq(lit(ov.country_code.clone()))
                    .and(col("year").eq(lit(ov.year))),
            )
            .then(lit(ov.value))
            .otherwise(col(ov.field.as_str()))
            .alias(ov.field.as_str()),
        );
    }

    // Baseline-year rows exist only for lag construction upstream.
    lf = lf.filter(col("year").neq(lit(cfg.baseline_year)));

    // Join output order is not guaranteed; restore the panel sort.
    lf = lf.sort(["country_code", "year"], SortMultipleOptions::default());

    let merged = lf.collect()?;

    // The contract check makes row multiplication impossible; a mismatch
    // here means the join itself misbehaved.
    if merged.height() != panel_height - baseline_rows {
        anyhow::bail!(
            "Populism merge changed the panel row count: {} before, {} after",
            panel_height - baseline_rows,
            merged.height()
        );
    }

    Ok(merged)
}

fn panel_year_count(panel: &DataFrame, year: i32) -> Result<usize> {
    let years = panel.column("year")?.i32()?;
    Ok(years.into_iter().flatten().filter(|y| *y == year).count())
}

/// Enforce the 1:1 contract between the panel and the in-scope subset of
/// the populism table.
fn check_join_contract(panel: &DataFrame, populism: &DataFrame) -> Result<()> {
    let panel_keys = key_set(panel)?;
    let panel_countries: HashSet<String> =
        panel_keys.iter().map(|(code, _)| code.clone()).collect();
    let panel_years: HashSet<i32> = panel_keys.iter().map(|(_, year)| *year).collect();

    let codes = populism.column("country_code")?.str()?;
    let years = populism.column("year")?.i32()?;

    let mut in_scope: HashMap<(String, i32), usize> = HashMap::new();
    for (code, year) in codes.into_iter().zip(years.into_iter()) {
        let (Some(code), Some(year)) = (code, year) else {
            continue;
        };
        if panel_countries.contains(code) && panel_years.contains(&year) {
            *in_scope.entry((code.to_string(), year)).or_insert(0) += 1;
        }
    }

    let mut duplicates: Vec<(String, i32)> = in_scope
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(key, _)| key.clone())
        .collect();
    if !duplicates.is_empty() {
        duplicates.sort();
        return Err(PanelError::DuplicateKeys {
            side: MergeSide::Populism,
            keys: duplicates,
        }
        .into());
    }

    let mut unmatched_panel: Vec<(String, i32)> = panel_keys
        .iter()
        .filter(|key| !in_scope.contains_key(*key))
        .cloned()
        .collect();
    if !unmatched_panel.is_empty() {
        unmatched_panel.sort();
        return Err(PanelError::UnmatchedKeys {
            side: MergeSide::Panel,
            keys: unmatched_panel,
        }
        .into());
    }

    let mut unmatched_populism: Vec<(String, i32)> = in_scope
        .keys()
        .filter(|key| !panel_keys.contains(*key))
        .cloned()
        .collect();
    if !unmatched_populism.is_empty() {
        unmatched_populism.sort();
        return Err(PanelError::UnmatchedKeys {
            side: MergeSide::Populism,
            keys: unmatched_populism,
        }
        .into());
    }

    Ok(())
}

fn key_set(panel: &DataFrame) -> Result<HashSet<(String, i32)>> {
    let codes = panel.column("country_code")?.str()?;
    let years = panel.column("year")?.i32()?;
    let mut keys = HashSet::new();
    for (code, year) in codes.into_iter().zip(years.into_iter()) {
        if let (Some(code), Some(year)) = (code, year) {
            keys.insert((code.to_string(), year));
        }
    }
    Ok(keys)
}
