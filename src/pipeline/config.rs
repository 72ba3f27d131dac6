//! Pipeline configuration
//!
//! Every stage receives an explicit `PipelineConfig` instead of reading
//! process-wide globals: the region code, the year window, the indicator
//! rename table, the manual override table, and the dollarization rules
//! all live here. The static tables document the analysis as shipped;
//! only the region and year window are adjustable from the CLI.

/// A manual correction for a single (country, year, field) cell.
///
/// Overrides are applied after the populism merge and before
/// standardization, and take precedence over any source-provided value
/// (including a missing one).
#[derive(Debug, Clone)]
pub struct CellOverride {
    pub country_code: String,
    pub year: i32,
    pub field: String,
    pub value: f64,
}

/// Dollarization regime for a single country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DollarRegime {
    /// Dollarized for the whole analysis window.
    Always,
    /// Dollarized from the given year onward (inclusive).
    Since(i32),
}

/// One row of the static dollarization rule table.
#[derive(Debug, Clone)]
pub struct DollarRule {
    pub country_code: String,
    pub regime: DollarRegime,
}

/// Configuration for a full panel build.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// World Bank region code the panel is restricted to.
    pub region: String,
    /// Lower bound (inclusive) of the analysis year window.
    pub min_year: i32,
    /// Year subtracted from `year` to form the time trend.
    pub base_year: i32,
    /// Baseline year used only for lag construction upstream; dropped
    /// from the panel after the populism merge if present.
    pub baseline_year: i32,
    /// Source indicator code -> short mnemonic field name, 1:1.
    pub indicator_renames: Vec<(String, String)>,
    /// Populism-index fields carried through the merge, in output order.
    pub populism_fields: Vec<String>,
    /// Manual cell overrides applied after the merge.
    pub overrides: Vec<CellOverride>,
    /// Static dollarization rule table.
    pub dollarization: Vec<DollarRule>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let indicator_renames = [
            ("GFDD.DI.01", "GFD_01"),
            ("GFDD.DI.05", "GFD_02"),
            ("GFDD.DM.01", "GFD_03"),
            ("GFDD.EI.01", "GFD_04"),
            ("GFDD.OI.02", "GFD_05"),
            ("GFDD.SI.04", "GFD_06"),
            ("NY.GDP.MKTP.KD.ZG", "WDI_01"),
            ("NY.GDP.PCAP.KD", "WDI_02"),
            ("FP.CPI.TOTL.ZG", "WDI_03"),
            ("NE.TRD.GNFS.ZS", "WDI_04"),
            ("BN.CAB.XOKA.GD.ZS", "WDI_05"),
            ("GC.DOD.TOTL.GD.ZS", "WDI_06"),
            ("SL.UEM.TOTL.ZS", "WDI_07"),
        ]
        .iter()
        .map(|(code, field)| (code.to_string(), field.to_string()))
        .collect();

        let populism_fields = [
            "POP", "PIP", "PEP", "IP", "IP_1", "IP_2", "IP_3", "IP_4", "IP_5", "IP_6", "EP",
            "EP_1", "EP_2", "EP_3", "EP_4", "POP_R",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect();

        // Argentina's official 2002 CPI understates the post-convertibility
        // devaluation; the correction is a documented literal.
        let overrides = vec![CellOverride {
            country_code: "ARG".to_string(),
            year: 2002,
            field: "WDI_03".to_string(),
            value: 40.9,
        }];

        let dollarization = vec![
            DollarRule {
                country_code: "PAN".to_string(),
                regime: DollarRegime::Always,
            },
            DollarRule {
                country_code: "ECU".to_string(),
                regime: DollarRegime::Since(2000),
            },
            DollarRule {
                country_code: "SLV".to_string(),
                regime: DollarRegime::Since(2001),
            },
        ];

        Self {
            region: "LCN".to_string(),
            min_year: 2002,
            base_year: 2002,
            baseline_year: 2000,
            indicator_renames,
            populism_fields,
            overrides,
            dollarization,
        }
    }
}

impl PipelineConfig {
    /// Mnemonic indicator field names, in rename-table order.
    pub fn indicator_fields(&self) -> Vec<String> {
        self.indicator_renames
            .iter()
            .map(|(_, field)| field.clone())
            .collect()
    }

    /// Source indicator codes expected in the fetcher output.
    pub fn indicator_source_codes(&self) -> Vec<String> {
        self.indicator_renames
            .iter()
            .map(|(code, _)| code.clone())
            .collect()
    }

    /// The documented column order of the materialized panel.
    pub fn output_columns(&self) -> Vec<String> {
        let mut cols: Vec<String> = ["country_id", "country_code", "country_name", "year"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        cols.extend(self.indicator_fields());
        cols.push("time_trend".to_string());
        cols.push("time_trend2".to_string());
        cols.extend(self.populism_fields.iter().cloned());
        for index in crate::pipeline::standardize::STANDARDIZED_INDICES {
            cols.push(format!("{index}_z"));
        }
        cols.push("dollarized".to_string());
        cols.push("quadrant".to_string());
        cols.push("quad_2".to_string());
        cols.push("quad_3".to_string());
        cols.push("quad_4".to_string());
        cols
    }
}
