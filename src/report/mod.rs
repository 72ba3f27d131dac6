//! Report module - summarizing the materialized panel

pub mod build_report;
pub mod summary;

pub use build_report::*;
pub use summary::*;
