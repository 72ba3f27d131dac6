//! Popanel: Populism Panel Builder
//!
//! A library for constructing a Latin American country/year panel from
//! World Bank indicators and an external populism-index table: region and
//! year filtering, a 1:1 populism merge with manual overrides, within-year
//! standardization, a median-split quadrant typology, and a dollarization
//! flag, materialized as Parquet plus a flat CSV export.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
