//! Shared test fixtures and helpers

use polars::prelude::*;
use popanel::pipeline::PipelineConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// The Latin American countries used by the fixtures.
pub const LCN_COUNTRIES: [(&str, &str); 4] = [
    ("ARG", "Argentina"),
    ("BRA", "Brazil"),
    ("ECU", "Ecuador"),
    ("PAN", "Panama"),
];

/// In-window fixture years.
pub const YEARS: [i32; 3] = [2002, 2003, 2004];

/// Wide indicator table as the World Bank fetcher would return it:
/// the four LCN countries for 2002-2004, one out-of-region row (USA)
/// and one out-of-window row (ARG 2001), with every source indicator
/// code carrying distinct values.
pub fn create_indicator_dataframe() -> DataFrame {
    let cfg = PipelineConfig::default();

    let mut codes: Vec<&str> = Vec::new();
    let mut names: Vec<&str> = Vec::new();
    let mut regions: Vec<&str> = Vec::new();
    let mut years: Vec<i32> = Vec::new();
    for (code, name) in LCN_COUNTRIES {
        for year in YEARS {
            codes.push(code);
            names.push(name);
            regions.push("LCN");
            years.push(year);
        }
    }
    codes.push("USA");
    names.push("United States");
    regions.push("NAC");
    years.push(2003);
    codes.push("ARG");
    names.push("Argentina");
    regions.push("LCN");
    years.push(2001);

    let n = codes.len();
    let mut columns = vec![
        Column::new("country_code".into(), codes),
        Column::new("country_name".into(), names),
        Column::new("region".into(), regions),
        Column::new("year".into(), years),
    ];
    for (k, code) in cfg.indicator_source_codes().iter().enumerate() {
        let values: Vec<f64> = (0..n)
            .map(|row| 10.0 * (k as f64 + 1.0) + row as f64)
            .collect();
        columns.push(Column::new(code.as_str().into(), values));
    }
    DataFrame::new(columns).unwrap()
}

/// Populism-index table keyed by (country_code, year): the four LCN
/// countries for 2000 and 2002-2004 (2000 is the out-of-window baseline
/// the merger must ignore), every configured populism field, and two
/// metadata columns the merger must drop.
pub fn create_populism_dataframe() -> DataFrame {
    let cfg = PipelineConfig::default();

    let mut codes: Vec<&str> = Vec::new();
    let mut years: Vec<i32> = Vec::new();
    for (code, _) in LCN_COUNTRIES {
        for year in [2000, 2002, 2003, 2004] {
            codes.push(code);
            years.push(year);
        }
    }

    let n = codes.len();
    let mut columns = vec![
        Column::new("country_code".into(), codes),
        Column::new("year".into(), years),
    ];
    for (k, field) in cfg.populism_fields.iter().enumerate() {
        // Country spread keeps within-year variance non-zero.
        let values: Vec<f64> = (0..n)
            .map(|row| {
                let country = (row / 4) as f64;
                let year_idx = (row % 4) as f64;
                k as f64 + country * 1.0 + year_idx * 0.1
            })
            .collect();
        columns.push(Column::new(field.as_str().into(), values));
    }
    columns.push(Column::new("president".into(), vec!["unknown"; n]));
    columns.push(Column::new("source".into(), vec!["index-v2"; n]));
    DataFrame::new(columns).unwrap()
}

/// Write a DataFrame to a temp CSV file, returning the directory guard
/// and the file path.
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Materialize a string column as owned values.
pub fn str_col(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect()
}

/// Materialize an i32 column.
pub fn i32_col(df: &DataFrame, name: &str) -> Vec<Option<i32>> {
    df.column(name).unwrap().i32().unwrap().into_iter().collect()
}

/// Materialize an f64 column.
pub fn f64_col(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name).unwrap().f64().unwrap().into_iter().collect()
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}
