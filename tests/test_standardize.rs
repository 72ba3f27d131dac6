//! Unit tests for the within-year Standardizer

use polars::prelude::*;
use popanel::pipeline::standardize_within_year;

#[path = "common/mod.rs"]
mod common;

fn index_frame(years: Vec<i32>, values: Vec<Option<f64>>) -> DataFrame {
    df! {
        "year" => years,
        "POP" => values.clone(),
        "PIP" => values.clone(),
        "PEP" => values,
    }
    .unwrap()
}

fn sample_stats(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

#[test]
fn test_within_year_mean_zero_sd_one() {
    let df = index_frame(
        vec![2002, 2002, 2002, 2002, 2003, 2003, 2003, 2003],
        vec![
            Some(1.0),
            Some(2.0),
            Some(4.0),
            Some(8.0),
            Some(100.0),
            Some(150.0),
            Some(200.0),
            Some(400.0),
        ],
    );

    let out = standardize_within_year(df).unwrap();
    let years = common::i32_col(&out, "year");
    let zs = common::f64_col(&out, "POP_z");

    for target_year in [2002, 2003] {
        let year_zs: Vec<f64> = years
            .iter()
            .zip(zs.iter())
            .filter(|(year, _)| **year == Some(target_year))
            .map(|(_, z)| z.unwrap())
            .collect();
        let (mean, sd) = sample_stats(&year_zs);
        assert!(mean.abs() < 1e-9, "year {} mean {}", target_year, mean);
        assert!((sd - 1.0).abs() < 1e-9, "year {} sd {}", target_year, sd);
    }
}

#[test]
fn test_years_scaled_independently() {
    // Identical raw values standardize to identical z-scores regardless
    // of what other years contain.
    let df = index_frame(
        vec![2002, 2002, 2003, 2003],
        vec![Some(1.0), Some(3.0), Some(1000.0), Some(3000.0)],
    );

    let out = standardize_within_year(df).unwrap();
    let zs = common::f64_col(&out, "POP_z");

    let sqrt_half = (0.5f64).sqrt();
    for (z, expected) in zs.iter().zip([-sqrt_half, sqrt_half, -sqrt_half, sqrt_half]) {
        assert!((z.unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_single_observation_year_is_missing() {
    let df = index_frame(
        vec![2002, 2002, 2005],
        vec![Some(1.0), Some(2.0), Some(7.0)],
    );

    let out = standardize_within_year(df).unwrap();
    let years = common::i32_col(&out, "year");
    let zs = common::f64_col(&out, "POP_z");

    for (year, z) in years.iter().zip(zs.iter()) {
        if *year == Some(2005) {
            assert!(z.is_none(), "single-observation year must yield missing z");
        } else {
            assert!(z.is_some());
        }
    }
}

#[test]
fn test_zero_variance_year_is_missing() {
    let df = index_frame(
        vec![2002, 2002, 2002],
        vec![Some(5.0), Some(5.0), Some(5.0)],
    );

    let out = standardize_within_year(df).unwrap();
    for z in common::f64_col(&out, "POP_z") {
        assert!(z.is_none(), "zero-variance year must yield missing z, not an error");
    }
}

#[test]
fn test_missing_input_propagates() {
    let df = index_frame(
        vec![2002, 2002, 2002, 2002],
        vec![Some(1.0), None, Some(2.0), Some(4.0)],
    );

    let out = standardize_within_year(df).unwrap();
    let zs = common::f64_col(&out, "POP_z");

    assert!(zs[1].is_none(), "missing raw value must stay missing");

    // The remaining rows standardize over the three non-missing values.
    let non_missing: Vec<f64> = [1.0, 2.0, 4.0].to_vec();
    let (mean, sd) = sample_stats(&non_missing);
    for (idx, raw) in [(0usize, 1.0), (2, 2.0), (3, 4.0)] {
        let expected = (raw - mean) / sd;
        assert!((zs[idx].unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_all_three_indices_standardized() {
    let df = index_frame(
        vec![2002, 2002],
        vec![Some(1.0), Some(2.0)],
    );

    let out = standardize_within_year(df).unwrap();
    common::assert_has_columns(&out, &["POP_z", "PIP_z", "PEP_z"]);
    common::assert_missing_columns(&out, &["POP_mu", "POP_sd", "POP_n"]);
}
