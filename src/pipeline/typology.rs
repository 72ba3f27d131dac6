//! Typology Assigner - median-split populism quadrants
//!
//! Crosses two binary median-split indicators (institutional and economic
//! populism z-scores) into a four-way categorical typology. The medians
//! are computed over the entire current panel, not per year, so the split
//! is a reproducible function of the rows present at assignment time.

use anyhow::Result;
use polars::prelude::*;

/// The four mutually exclusive quadrant categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    Control,
    Economic,
    Institutional,
    Full,
}

impl Quadrant {
    /// The label stored in the `quadrant` column.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::Control => "Control",
            Quadrant::Economic => "Economic Populism",
            Quadrant::Institutional => "Institutional Populism",
            Quadrant::Full => "Full Populism",
        }
    }

    /// The 0/1 indicator column for this quadrant, if it has one.
    /// Control is the omitted baseline category.
    pub fn dummy_column(self) -> Option<&'static str> {
        match self {
            Quadrant::Control => None,
            Quadrant::Economic => Some("quad_2"),
            Quadrant::Institutional => Some("quad_3"),
            Quadrant::Full => Some("quad_4"),
        }
    }
}

/// Add `quadrant` and the `quad_2`/`quad_3`/`quad_4` dummies.
///
/// A row's quadrant is defined iff both `PIP_z` and `PEP_z` are
/// non-missing; "high" means strictly above the full-panel median, so a
/// row sitting exactly on the median is low. Dummies are 0 (not missing)
/// on unclassified rows.
pub fn assign_typology(df: DataFrame) -> Result<DataFrame> {
    let pip_median = column_median(&df, "PIP_z")?;
    let pep_median = column_median(&df, "PEP_z")?;

    let quadrant = match (pip_median, pep_median) {
        (Some(pip_median), Some(pep_median)) => {
            let high_pip = col("PIP_z").gt(lit(pip_median));
            let high_pep = col("PEP_z").gt(lit(pep_median));
            when(col("PIP_z").is_null().or(col("PEP_z").is_null()))
                .then(lit(NULL))
                .when(high_pip.clone().and(high_pep.clone()))
                .then(lit(Quadrant::Full.label()))
                .when(high_pip)
                .then(lit(Quadrant::Institutional.label()))
                .when(high_pep)
                .then(lit(Quadrant::Economic.label()))
                .otherwise(lit(Quadrant::Control.label()))
        }
        // An all-missing index leaves the whole panel unclassified.
        _ => lit(NULL).cast(DataType::String),
    }
    .alias("quadrant");

    let dummies: Vec<Expr> = [
        (Quadrant::Economic, "quad_2"),
        (Quadrant::Institutional, "quad_3"),
        (Quadrant::Full, "quad_4"),
    ]
    .iter()
    .map(|(quadrant, name)| {
        when(col("quadrant").eq(lit(quadrant.label())))
            .then(lit(1i32))
            .otherwise(lit(0i32))
            .alias(*name)
    })
    .collect();

    let out = df
        .lazy()
        .with_column(quadrant)
        .with_columns(dummies)
        .collect()?;
    Ok(out)
}

/// Sample median over the non-missing values of a column, or `None` when
/// every value is missing.
fn column_median(df: &DataFrame, name: &str) -> Result<Option<f64>> {
    let mut values: Vec<f64> = df.column(name)?.f64()?.into_iter().flatten().collect();
    if values.is_empty() {
        return Ok(None);
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };
    Ok(Some(median))
}
