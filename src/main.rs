//! Popanel: Populism Panel Builder CLI
//!
//! Builds the Latin American populism panel: loads the indicator and
//! populism tables, runs the construction stages in sequence, and writes
//! the Parquet panel plus the flat CSV export.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use popanel::cli::{confirm_overwrite, Cli};
use popanel::pipeline::{
    add_dollarized_flag, assign_typology, build_base_panel, load_table, merge_populism,
    order_columns, standardize_within_year, verify_panel_key, write_artifacts,
};
use popanel::report::{BuildReport, PanelSummary};
use popanel::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config, print_info,
    print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = cli.to_config();
    let csv_output = cli.csv_output_path();

    if cli
        .output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
        != Some("parquet")
    {
        anyhow::bail!(
            "Output path must end in .parquet, got: {}",
            cli.output.display()
        );
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &cli.indicators,
        &cli.populism,
        &cli.output,
        &csv_output,
        &cfg.region,
        cfg.min_year,
        cfg.base_year,
    );

    if !cli.no_confirm {
        for path in [&cli.output, &csv_output] {
            if path.exists() && !confirm_overwrite(path)? {
                println!("Cancelled by user.");
                return Ok(());
            }
        }
    }

    // Step 1: Load inputs
    print_step_header(1, "Load Inputs");
    let step_start = Instant::now();
    let spinner = create_spinner("Loading indicator and populism tables...");
    let indicators = load_table(&cli.indicators, cli.infer_schema_length)?;
    let populism = load_table(&cli.populism, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Inputs loaded");
    print_info(&format!(
        "Indicator table: {} rows × {} columns",
        indicators.height(),
        indicators.width()
    ));
    print_info(&format!(
        "Populism table: {} rows × {} columns",
        populism.height(),
        populism.width()
    ));
    let load_time = step_start.elapsed();
    print_step_time(load_time);

    // Step 2: Build base panel
    print_step_header(2, "Build Base Panel");
    let step_start = Instant::now();
    let panel = build_base_panel(indicators, &cfg)?;
    print_success(&format!(
        "Base panel: {} rows, {} columns",
        panel.height(),
        panel.width()
    ));
    let build_time = step_start.elapsed();
    print_step_time(build_time);

    // Step 3: Merge populism index
    print_step_header(3, "Merge Populism Index");
    let step_start = Instant::now();
    let panel = merge_populism(panel, populism, &cfg)?;
    print_success("1:1 merge verified, populism fields attached");
    let merge_time = step_start.elapsed();
    print_step_time(merge_time);

    // Step 4: Standardize within year
    print_step_header(4, "Standardize Within Year");
    let step_start = Instant::now();
    let panel = standardize_within_year(panel)?;
    print_success("Added POP_z, PIP_z, PEP_z");
    let standardize_time = step_start.elapsed();
    print_step_time(standardize_time);

    // Step 5: Assign quadrant typology
    print_step_header(5, "Assign Quadrant Typology");
    let step_start = Instant::now();
    let panel = assign_typology(panel)?;
    print_success("Added quadrant and quad_2..quad_4 dummies");
    let typology_time = step_start.elapsed();
    print_step_time(typology_time);

    // Step 6: Dollarization flag
    print_step_header(6, "Dollarization Flag");
    let step_start = Instant::now();
    let panel = add_dollarized_flag(panel, &cfg)?;
    print_success("Added dollarized");
    let flags_time = step_start.elapsed();
    print_step_time(flags_time);

    // Step 7: Materialize
    print_step_header(7, "Materialize Panel");
    let step_start = Instant::now();
    let panel = order_columns(panel, &cfg)?;
    verify_panel_key(&panel)?;
    let spinner = create_spinner("Writing artifacts...");
    write_artifacts(&panel, &cli.output, &csv_output)?;
    finish_with_success(
        &spinner,
        &format!(
            "Saved {} and {}",
            cli.output.display(),
            csv_output.display()
        ),
    );
    let save_time = step_start.elapsed();
    print_step_time(save_time);

    // Summary
    let mut summary = PanelSummary::from_panel(&panel)?;
    summary.load_time = load_time;
    summary.build_time = build_time;
    summary.merge_time = merge_time;
    summary.standardize_time = standardize_time;
    summary.typology_time = typology_time;
    summary.flags_time = flags_time;
    summary.save_time = save_time;
    summary.display();

    if let Some(report_path) = &cli.report {
        let report = BuildReport::new(&summary, &panel, &cfg, &cli.indicators, &cli.populism);
        report.write(report_path)?;
        print_success(&format!("Build report written to {}", report_path.display()));
    }

    print_completion();

    Ok(())
}
