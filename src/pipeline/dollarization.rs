//! Derived-Flag Builder - the dollarization indicator
//!
//! `dollarized` comes from a small static rule table keyed by country:
//! unconditionally dollarized economies, and economies dollarized from a
//! country-specific threshold year onward. The flag is always 0 or 1,
//! never missing.

use anyhow::Result;
use polars::prelude::*;

use super::config::{DollarRegime, PipelineConfig};

/// Add the `dollarized` 0/1 column from the configured rule table.
pub fn add_dollarized_flag(df: DataFrame, cfg: &PipelineConfig) -> Result<DataFrame> {
    let mut flag = lit(0i32);
    for rule in &cfg.dollarization {
        let matches = col("country_code").eq(lit(rule.country_code.clone()));
        let matches = match rule.regime {
            DollarRegime::Always => matches,
            DollarRegime::Since(year) => matches.and(col("year").gt_eq(lit(year))),
        };
        flag = when(matches).then(lit(1i32)).otherwise(flag);
    }

    let out = df.lazy().with_column(flag.alias("dollarized")).collect()?;
    Ok(out)
}
