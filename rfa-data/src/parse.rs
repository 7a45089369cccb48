//! JSON parsing entry points for the embedded analysis fixtures.
//!
//! Each function takes the raw JSON string an app embedded via
//! `include_str!` and returns the typed result. Failures bubble up as
//! `anyhow::Error`; apps log them and surface an error message instead
//! of rendering.

use crate::models::{
    AnalysisResult, BasicFrequencyRecord, FrequencyCurveResult, FrequencyTableResult,
};
use anyhow::Context;

/// Parse the multi-distribution analysis result.
pub fn parse_analysis_result(json: &str) -> anyhow::Result<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_str(json).context("invalid analysis result JSON")?;
    log::info!(
        "[RFA Debug] parse: analysis result with {} compared distributions",
        result
            .distribution_comparison
            .as_ref()
            .map(|c| c.len())
            .unwrap_or(0)
    );
    Ok(result)
}

/// Parse a fitted frequency curve result.
pub fn parse_frequency_curve(json: &str) -> anyhow::Result<FrequencyCurveResult> {
    let result: FrequencyCurveResult =
        serde_json::from_str(json).context("invalid frequency curve JSON")?;
    log::info!(
        "[RFA Debug] parse: frequency curve, {} theoretical / {} empirical points",
        result.theoretical_curve.as_ref().map(Vec::len).unwrap_or(0),
        result.empirical_points.as_ref().map(Vec::len).unwrap_or(0),
    );
    Ok(result)
}

/// Parse the display frequency table.
pub fn parse_frequency_table(json: &str) -> anyhow::Result<FrequencyTableResult> {
    let result: FrequencyTableResult =
        serde_json::from_str(json).context("invalid frequency table JSON")?;
    log::info!(
        "[RFA Debug] parse: frequency table, {} theoretical rows",
        result.theoretical_curve.len()
    );
    Ok(result)
}

/// Parse the basic frequency records (histogram sample source).
pub fn parse_basic_frequency(json: &str) -> anyhow::Result<Vec<BasicFrequencyRecord>> {
    let records: Vec<BasicFrequencyRecord> =
        serde_json::from_str(json).context("invalid basic frequency JSON")?;
    log::info!("[RFA Debug] parse: {} basic frequency records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_analysis_result_full() {
        let json = r#"{
            "distribution_comparison": {
                "gumbel": {"AIC": 412.3, "ChiSquare": 3.1, "p_value": 0.21, "quality_grade": "good"},
                "lognorm": {"AIC": 418.9, "ChiSquare": 5.6, "p_value": 0.04}
            },
            "goodness_ranking": [
                {"distribution": "gumbel", "rank": 1, "aic": 412.3, "p_value": 0.21},
                {"distribution": "lognorm", "rank": 2, "aic": 418.9, "p_value": 0.04}
            ],
            "qc_summary": {
                "quality_score": 87.5,
                "completeness": 96.0,
                "professional_grade": true,
                "recommendations": ["Extend the record beyond 30 years for firmer tails."]
            }
        }"#;
        let result = parse_analysis_result(json).unwrap();

        let comparison = result.distribution_comparison.unwrap();
        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison["gumbel"].aic, Some(412.3));
        assert_eq!(comparison["gumbel"].quality_grade.as_deref(), Some("good"));
        assert_eq!(comparison["lognorm"].p_value, Some(0.04));
        assert_eq!(comparison["lognorm"].quality_grade, None);

        let ranking = result.goodness_ranking.unwrap();
        assert_eq!(ranking[0].distribution, "gumbel");
        assert_eq!(ranking[0].rank, 1);

        let qc = result.qc_summary.unwrap();
        assert_eq!(qc.professional_grade, Some(true));
        assert_eq!(qc.recommendations.len(), 1);
    }

    #[test]
    fn parse_analysis_result_empty_object() {
        // The evaluation panel must render its empty state from this.
        let result = parse_analysis_result("{}").unwrap();
        assert!(result.distribution_comparison.is_none());
        assert!(result.goodness_ranking.is_none());
        assert!(result.qc_summary.is_none());
    }

    #[test]
    fn parse_frequency_curve_with_statistics() {
        let json = r#"{
            "theoretical_curve": [
                {"P_percent": 0.01, "Q": 913.2},
                {"P_percent": 1.0, "Q": 612.4}
            ],
            "empirical_points": [{"P_percent": 2.44, "Q": 598.0}],
            "statistics": {"mean": 321.4, "std": 88.2, "cv": 0.274, "cs": 1.13, "n": 40},
            "distribution": "gumbel",
            "quality_warnings": ["Small sample (n=40)."]
        }"#;
        let result = parse_frequency_curve(json).unwrap();
        assert!(result.is_plottable());
        assert_eq!(result.theoretical_curve.unwrap()[1].discharge, 612.4);
        assert_eq!(result.statistics.unwrap().n, 40);
        assert_eq!(result.distribution.as_deref(), Some("gumbel"));
        assert_eq!(result.quality_warnings.len(), 1);
    }

    #[test]
    fn parse_frequency_curve_missing_series() {
        let result = parse_frequency_curve(r#"{"theoretical_curve": []}"#).unwrap();
        assert!(!result.is_plottable());
        assert!(result.empirical_points.is_none());
    }

    #[test]
    fn parse_frequency_table_localized_keys() {
        let json = r#"{
            "theoretical_curve": [
                {
                    "Thứ tự": 1,
                    "Tần suất P(%)": "1.00",
                    "Lưu lượng dòng chảy Q m³/s": "612.40",
                    "Thời gian lặp lại (năm)": "100.000"
                },
                {
                    "Thứ tự": 2,
                    "Tần suất P(%)": "99.90",
                    "Lưu lượng dòng chảy Q m³/s": "0.00",
                    "Thời gian lặp lại (năm)": "1.001",
                    "clamped": true,
                    "original_value": "-12.80"
                }
            ],
            "empirical_points": [
                {
                    "Thứ tự": 1,
                    "Tần suất P(%)": "2.44",
                    "Lưu lượng dòng chảy Q m³/s": "598.00",
                    "Thời gian lặp lại (năm)": "41.000"
                }
            ],
            "warning": "1 negative quantile clamped to 0."
        }"#;
        let result = parse_frequency_table(json).unwrap();
        assert_eq!(result.theoretical_curve.len(), 2);
        assert_eq!(result.theoretical_curve[0].probability_value(), Some(1.0));
        assert!(result.theoretical_curve[1].clamped);
        assert_eq!(
            result.theoretical_curve[1].original_value.as_deref(),
            Some("-12.80")
        );
        assert_eq!(result.empirical_points.unwrap().len(), 1);
        assert!(result.warning.is_some());
    }

    #[test]
    fn parse_basic_frequency_tolerates_junk_index() {
        let json = r#"[
            {"Thứ tự": 1, "Thời gian": "1998-1999", "Chỉ số": 321.5, "Tần suất P(%)": 12.2, "Thứ hạng": 5},
            {"Thứ tự": 2, "Thời gian": "1999-2000", "Chỉ số": "287.10", "Tần suất P(%)": 24.4, "Thứ hạng": 10},
            {"Thứ tự": 3, "Thời gian": "2000-2001", "Chỉ số": "---"},
            {"Thứ tự": 4, "Thời gian": "2001-2002"}
        ]"#;
        let records = parse_basic_frequency(json).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].index_value, Some(321.5));
        assert_eq!(records[1].index_value, Some(287.1), "numeric strings parse");
        assert_eq!(records[2].index_value, None, "sentinel strings become None");
        assert_eq!(records[3].index_value, None, "missing cells become None");
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_analysis_result("not json").is_err());
        assert!(parse_frequency_curve("[1,2]").is_err());
        assert!(parse_basic_frequency("{}").is_err());
    }
}
