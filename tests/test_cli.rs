//! CLI smoke tests for the popanel binary

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_full_run_writes_artifacts() {
    let (_indicator_dir, indicators) = common::create_temp_csv(&mut common::create_indicator_dataframe());
    let (_populism_dir, populism) = common::create_temp_csv(&mut common::create_populism_dataframe());
    let out_dir = tempfile::TempDir::new().unwrap();
    let output = out_dir.path().join("panel.parquet");
    let report = out_dir.path().join("build_report.json");

    Command::cargo_bin("popanel")
        .unwrap()
        .arg("--indicators")
        .arg(&indicators)
        .arg("--populism")
        .arg(&populism)
        .arg("--output")
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Panel build complete"));

    assert!(output.exists());
    assert!(output.with_extension("csv").exists());

    let report_json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(report_json["region"], "LCN");
    assert_eq!(report_json["rows"], 12);
}

#[test]
fn test_missing_indicator_column_fails() {
    let mut broken = common::create_indicator_dataframe().drop("GFDD.DI.01").unwrap();
    let (_indicator_dir, indicators) = common::create_temp_csv(&mut broken);
    let (_populism_dir, populism) = common::create_temp_csv(&mut common::create_populism_dataframe());
    let out_dir = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("popanel")
        .unwrap()
        .arg("--indicators")
        .arg(&indicators)
        .arg("--populism")
        .arg(&populism)
        .arg("--output")
        .arg(out_dir.path().join("panel.parquet"))
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column"));
}

#[test]
fn test_non_parquet_output_is_rejected() {
    let (_indicator_dir, indicators) = common::create_temp_csv(&mut common::create_indicator_dataframe());
    let (_populism_dir, populism) = common::create_temp_csv(&mut common::create_populism_dataframe());
    let out_dir = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("popanel")
        .unwrap()
        .arg("--indicators")
        .arg(&indicators)
        .arg("--populism")
        .arg(&populism)
        .arg("--output")
        .arg(out_dir.path().join("panel.txt"))
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must end in .parquet"));
}
