//! Error types for panel construction.
//!
//! `PanelError` covers the two fatal classes of the pipeline: configuration
//! errors (an expected source column is absent) and join-integrity errors
//! (duplicate, unmatched, or non-unique panel keys). Missing data is never
//! an error; it propagates as nulls through the derived columns.

use thiserror::Error;

/// Which side of the populism merge a key problem was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    Panel,
    Populism,
}

impl std::fmt::Display for MergeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeSide::Panel => write!(f, "panel"),
            MergeSide::Populism => write!(f, "populism"),
        }
    }
}

/// Fatal errors raised during panel construction.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A column the configuration references is absent from an input table.
    #[error("Missing required column '{column}' in {table} table")]
    MissingColumn { table: &'static str, column: String },

    /// A key column contains nulls and cannot serve as a join key.
    #[error("Column '{column}' in {table} table contains {count} null value(s)")]
    NullKey {
        table: &'static str,
        column: String,
        count: usize,
    },

    /// The same (country, year) key appears more than once on one side of
    /// the populism merge.
    #[error("Duplicate key(s) on {side} side of populism merge: {}", render_keys(keys))]
    DuplicateKeys {
        side: MergeSide,
        keys: Vec<(String, i32)>,
    },

    /// In-window keys on one side of the populism merge found no partner.
    #[error("{} unmatched key(s) on {side} side of populism merge: {}", keys.len(), render_keys(keys))]
    UnmatchedKeys {
        side: MergeSide,
        keys: Vec<(String, i32)>,
    },

    /// The materialized panel key (country_id, year) is not unique.
    #[error("Panel key (country_id, year) is not unique; duplicate key(s): {}", render_id_keys(keys))]
    NonUniquePanelKey { keys: Vec<(i32, i32)> },
}

fn render_keys(keys: &[(String, i32)]) -> String {
    keys.iter()
        .map(|(code, year)| format!("({code}, {year})"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_id_keys(keys: &[(i32, i32)]) -> String {
    keys.iter()
        .map(|(id, year)| format!("({id}, {year})"))
        .collect::<Vec<_>>()
        .join(", ")
}
