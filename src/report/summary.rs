//! Panel summary report generation

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;
use polars::prelude::*;
use serde::Serialize;
use std::time::Duration;

use crate::pipeline::Quadrant;

/// Row counts per quadrant category.
#[derive(Debug, Default, Clone, Serialize)]
pub struct QuadrantCounts {
    pub control: usize,
    pub economic: usize,
    pub institutional: usize,
    pub full: usize,
    /// Rows where either standardized index is missing.
    pub unclassified: usize,
}

/// Summary of a completed panel build.
#[derive(Debug, Default)]
pub struct PanelSummary {
    pub rows: usize,
    pub countries: usize,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub quadrants: QuadrantCounts,
    pub dollarized_rows: usize,
    pub load_time: Duration,
    pub build_time: Duration,
    pub merge_time: Duration,
    pub standardize_time: Duration,
    pub typology_time: Duration,
    pub flags_time: Duration,
    pub save_time: Duration,
}

impl PanelSummary {
    /// Collect the content statistics from the final panel.
    pub fn from_panel(df: &DataFrame) -> Result<Self> {
        let mut summary = Self {
            rows: df.height(),
            ..Default::default()
        };

        let ids = df.column("country_id")?.i32()?;
        let mut distinct: std::collections::HashSet<i32> = std::collections::HashSet::new();
        for id in ids.into_iter().flatten() {
            distinct.insert(id);
        }
        summary.countries = distinct.len();

        let years = df.column("year")?.i32()?;
        summary.year_min = years.min();
        summary.year_max = years.max();

        for value in df.column("quadrant")?.str()?.into_iter() {
            match value {
                Some(label) if label == Quadrant::Control.label() => {
                    summary.quadrants.control += 1
                }
                Some(label) if label == Quadrant::Economic.label() => {
                    summary.quadrants.economic += 1
                }
                Some(label) if label == Quadrant::Institutional.label() => {
                    summary.quadrants.institutional += 1
                }
                Some(label) if label == Quadrant::Full.label() => summary.quadrants.full += 1,
                _ => summary.quadrants.unclassified += 1,
            }
        }

        summary.dollarized_rows = df
            .column("dollarized")?
            .i32()?
            .into_iter()
            .flatten()
            .filter(|flag| *flag == 1)
            .count();

        Ok(summary)
    }

    pub fn total_time(&self) -> Duration {
        self.load_time
            + self.build_time
            + self.merge_time
            + self.standardize_time
            + self.typology_time
            + self.flags_time
            + self.save_time
    }

    pub fn display(&self) {
        println!();
        println!("    {}", style("PANEL SUMMARY").white().bold());
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Rows"), Cell::new(self.rows)]);
        table.add_row(vec![Cell::new("Countries"), Cell::new(self.countries)]);
        let years = match (self.year_min, self.year_max) {
            (Some(min), Some(max)) => format!("{min}-{max}"),
            _ => "-".to_string(),
        };
        table.add_row(vec![Cell::new("Years"), Cell::new(years)]);
        table.add_row(vec![
            Cell::new("Control"),
            Cell::new(self.quadrants.control),
        ]);
        table.add_row(vec![
            Cell::new("Economic Populism"),
            Cell::new(self.quadrants.economic),
        ]);
        table.add_row(vec![
            Cell::new("Institutional Populism"),
            Cell::new(self.quadrants.institutional),
        ]);
        table.add_row(vec![
            Cell::new("Full Populism"),
            Cell::new(self.quadrants.full),
        ]);
        table.add_row(vec![
            Cell::new("Unclassified (missing z)"),
            Cell::new(self.quadrants.unclassified),
        ]);
        table.add_row(vec![
            Cell::new("Dollarized rows"),
            Cell::new(self.dollarized_rows),
        ]);
        table.add_row(vec![
            Cell::new("Total time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
