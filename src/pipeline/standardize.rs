//! Standardizer - within-year z-scores for the populism indices
//!
//! For each index and each year, the z-score is computed over all
//! countries present that year; different years use independent scaling
//! parameters. Years with fewer than two non-missing observations, or
//! with zero variance, yield a missing z-score for every row of that
//! year rather than an error.

use anyhow::Result;
use polars::prelude::*;
use std::collections::HashMap;

/// The indices that receive a `_z` counterpart.
pub const STANDARDIZED_INDICES: [&str; 3] = ["POP", "PIP", "PEP"];

/// Add `POP_z`, `PIP_z`, `PEP_z` to the merged panel.
///
/// Row order is preserved; the transform appends columns in place.
pub fn standardize_within_year(mut df: DataFrame) -> Result<DataFrame> {
    for index in STANDARDIZED_INDICES {
        let z = z_scores(&df, index)?;
        df.with_column(Column::new(format!("{index}_z").into(), z))?;
    }
    Ok(df)
}

/// Per-year sample mean and sample (ddof = 1) standard deviation.
struct YearScale {
    mean: f64,
    sd: f64,
}

fn z_scores(df: &DataFrame, index: &str) -> Result<Vec<Option<f64>>> {
    let years = df.column("year")?.i32()?;
    let values = df.column(index)?.f64()?;

    let mut grouped: HashMap<i32, Vec<f64>> = HashMap::new();
    for (year, value) in years.into_iter().zip(values.into_iter()) {
        if let (Some(year), Some(value)) = (year, value) {
            grouped.entry(year).or_default().push(value);
        }
    }

    let mut scales: HashMap<i32, YearScale> = HashMap::new();
    for (year, observed) in &grouped {
        if observed.len() < 2 {
            continue;
        }
        let n = observed.len() as f64;
        let mean = observed.iter().sum::<f64>() / n;
        let var = observed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let sd = var.sqrt();
        if sd > 0.0 {
            scales.insert(*year, YearScale { mean, sd });
        }
    }

    let z = years
        .into_iter()
        .zip(values.into_iter())
        .map(|(year, value)| {
            let year = year?;
            let value = value?;
            let scale = scales.get(&year)?;
            Some((value - scale.mean) / scale.sd)
        })
        .collect();
    Ok(z)
}
