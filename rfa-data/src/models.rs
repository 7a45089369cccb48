//! Result structs for the externally computed frequency analysis.
//!
//! Field names follow the backend's wire format. Tabular rows keep the
//! backend's Vietnamese column keys via `serde(rename)`; struct fields
//! are English. Numeric cells in tabular rows arrive as pre-formatted
//! strings and expose `*_value()` accessors for the places that need to
//! compute with them.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Top-level result of the multi-distribution analysis run.
///
/// Every section is optional; the backend omits whatever it could not
/// compute (e.g. `p_value` degrees-of-freedom too low, QC skipped).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Per-distribution fit statistics keyed by distribution name
    /// ("gumbel", "lognorm", ...). BTreeMap keeps render order stable.
    #[serde(default)]
    pub distribution_comparison: Option<BTreeMap<String, DistributionFit>>,
    /// Distributions ordered best-fit first.
    #[serde(default)]
    pub goodness_ranking: Option<Vec<GoodnessRank>>,
    /// Data-quality assessment of the underlying sample.
    #[serde(default)]
    pub qc_summary: Option<QcSummary>,
}

/// Fit statistics for a single candidate distribution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DistributionFit {
    #[serde(rename = "AIC", default)]
    pub aic: Option<f64>,
    #[serde(rename = "ChiSquare", default)]
    pub chi_square: Option<f64>,
    /// Chi-square goodness-of-fit p-value. None when the backend could
    /// not compute it (too few bins for the degrees of freedom).
    #[serde(default)]
    pub p_value: Option<f64>,
    #[serde(default)]
    pub quality_grade: Option<String>,
}

/// One entry of the goodness-of-fit ranking, best fit = rank 1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoodnessRank {
    pub distribution: String,
    pub rank: u32,
    #[serde(default)]
    pub aic: Option<f64>,
    #[serde(default)]
    pub p_value: Option<f64>,
}

/// Quality-control summary for the analyzed sample.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QcSummary {
    /// Overall score, 0-100.
    #[serde(default)]
    pub quality_score: Option<f64>,
    /// Record completeness, 0-100.
    #[serde(default)]
    pub completeness: Option<f64>,
    /// True when the sample meets professional analysis standards
    /// (n >= 30, acceptable variability).
    #[serde(default)]
    pub professional_grade: Option<bool>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A single (exceedance probability, discharge) point on a frequency curve.
///
/// Serialized back out with the backend's `P_percent`/`Q` keys so the
/// chart bridge can hand the points to D3 unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Exceedance probability in percent (0.01 - 99.99).
    #[serde(rename = "P_percent")]
    pub probability_percent: f64,
    /// Discharge (m³/s) or rainfall depth (mm).
    #[serde(rename = "Q")]
    pub discharge: f64,
}

/// Descriptive statistics the backend computed from the annual series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub std: f64,
    /// Coefficient of variation.
    #[serde(default)]
    pub cv: f64,
    /// Skewness coefficient.
    #[serde(default)]
    pub cs: f64,
    /// Sample size in years.
    #[serde(default)]
    pub n: u32,
}

/// Fitted frequency curve with the empirical plotting positions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrequencyCurveResult {
    #[serde(default)]
    pub theoretical_curve: Option<Vec<CurvePoint>>,
    /// Weibull plotting positions of the observed annual maxima.
    #[serde(default)]
    pub empirical_points: Option<Vec<CurvePoint>>,
    #[serde(default)]
    pub statistics: Option<SampleStatistics>,
    /// Name of the fitted distribution ("gumbel", "pearson3", ...).
    #[serde(default)]
    pub distribution: Option<String>,
    #[serde(default)]
    pub quality_warnings: Vec<String>,
}

impl FrequencyCurveResult {
    /// Both curves present and non-empty, i.e. there is something to plot.
    pub fn is_plottable(&self) -> bool {
        matches!(&self.theoretical_curve, Some(t) if !t.is_empty())
            && matches!(&self.empirical_points, Some(e) if !e.is_empty())
    }
}

/// Frequency table as shipped for display: a theoretical row per fixed
/// probability, plus an optional empirical row set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrequencyTableResult {
    #[serde(default)]
    pub theoretical_curve: Vec<FrequencyRow>,
    #[serde(default)]
    pub empirical_points: Option<Vec<FrequencyRow>>,
    /// Backend warning, e.g. negative quantiles clamped to zero on far
    /// extrapolation.
    #[serde(default)]
    pub warning: Option<String>,
}

/// One row of the frequency table, keyed exactly as the backend emits it.
///
/// Numeric cells are pre-formatted strings ("412.50"); use the value
/// accessors when computing with them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FrequencyRow {
    #[serde(rename = "Thứ tự", default)]
    pub order: Option<u32>,
    #[serde(rename = "Tần suất P(%)", default)]
    pub probability_percent: String,
    #[serde(rename = "Lưu lượng dòng chảy Q m³/s", default)]
    pub discharge: String,
    #[serde(rename = "Thời gian lặp lại (năm)", default)]
    pub return_period_years: Option<String>,
    /// True when the backend clamped a negative extrapolated quantile to 0.
    #[serde(default)]
    pub clamped: bool,
    /// The pre-clamp value, present only alongside `clamped`.
    #[serde(default)]
    pub original_value: Option<String>,
}

impl FrequencyRow {
    /// Exceedance probability as a number, if the cell parses.
    pub fn probability_value(&self) -> Option<f64> {
        self.probability_percent.trim().parse().ok()
    }

    /// Discharge as a number, if the cell parses.
    pub fn discharge_value(&self) -> Option<f64> {
        self.discharge.trim().parse().ok()
    }
}

/// One record of the basic (empirical) frequency table used as the
/// histogram sample. The `"Chỉ số"` cell is the raw annual value; it may
/// be absent or junk for incomplete years and must never fail parsing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BasicFrequencyRecord {
    #[serde(rename = "Thứ tự", default)]
    pub order: Option<u32>,
    /// Hydrological year label, e.g. "1998-1999".
    #[serde(rename = "Thời gian", default)]
    pub period: Option<String>,
    /// Annual index value (max rainfall / discharge) for the year.
    #[serde(rename = "Chỉ số", default, deserialize_with = "lenient_f64")]
    pub index_value: Option<f64>,
    #[serde(
        rename = "Tần suất P(%)",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub probability_percent: Option<f64>,
    #[serde(rename = "Thứ hạng", default)]
    pub rank: Option<u32>,
}

/// Accept a number, a numeric string, or anything else as None.
///
/// The station exports carry sentinel strings ("---", "N/A") in place of
/// missing measurements, same as the raw gauge files they come from.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_row_value_accessors() {
        let row = FrequencyRow {
            probability_percent: "1.00".to_string(),
            discharge: "412.50".to_string(),
            ..Default::default()
        };
        assert_eq!(row.probability_value(), Some(1.0));
        assert_eq!(row.discharge_value(), Some(412.5));

        let junk = FrequencyRow {
            probability_percent: "n/a".to_string(),
            ..Default::default()
        };
        assert_eq!(junk.probability_value(), None);
        assert_eq!(junk.discharge_value(), None);
    }

    #[test]
    fn curve_result_plottable_requires_both_series() {
        let point = CurvePoint {
            probability_percent: 1.0,
            discharge: 400.0,
        };
        let mut result = FrequencyCurveResult {
            theoretical_curve: Some(vec![point]),
            empirical_points: None,
            ..Default::default()
        };
        assert!(!result.is_plottable());

        result.empirical_points = Some(vec![point]);
        assert!(result.is_plottable());

        result.theoretical_curve = Some(Vec::new());
        assert!(!result.is_plottable(), "empty series is not plottable");
    }
}
