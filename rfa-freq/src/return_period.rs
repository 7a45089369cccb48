//! Return period derivation and qualitative banding.
//!
//! The return period T (years) is the reciprocal of the exceedance
//! probability: T = 100 / P(%). The display table keeps only the
//! canonical design frequencies engineers quote, not the backend's full
//! probability grid.

/// Exceedance probabilities (%) retained in the frequency summary table.
///
/// The set is nearly its own reciprocal under T = 100/P: P = 1% is the
/// 100-year event, P = 50% the 2-year event. P = 4% (T = 25) is not
/// quoted and is dropped.
pub const CANONICAL_PROBABILITIES: [f64; 8] =
    [1.0, 2.0, 5.0, 10.0, 20.0, 25.0, 50.0, 100.0];

/// Rounded return period in years for an exceedance probability in
/// percent. None for zero, negative, or non-finite probabilities.
pub fn return_period_years(probability_percent: f64) -> Option<u32> {
    if !probability_percent.is_finite() || probability_percent <= 0.0 {
        return None;
    }
    Some((100.0 / probability_percent).round() as u32)
}

/// Whether a probability is one of the canonical design frequencies.
///
/// Table cells carry two decimals ("25.00"), so membership is decided on
/// the rounded percent.
pub fn is_canonical_probability(probability_percent: f64) -> bool {
    if !probability_percent.is_finite() || probability_percent <= 0.0 {
        return false;
    }
    let rounded = probability_percent.round();
    (rounded - probability_percent).abs() < 0.005
        && CANONICAL_PROBABILITIES.iter().any(|c| *c == rounded)
}

/// Qualitative event-frequency band for a return period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnPeriodBand {
    /// T >= 50 years.
    Rare,
    /// 20 <= T < 50 years.
    Uncommon,
    /// 10 <= T < 20 years.
    Average,
    /// T < 10 years.
    Frequent,
}

impl ReturnPeriodBand {
    pub fn label(self) -> &'static str {
        match self {
            ReturnPeriodBand::Rare => "Rare",
            ReturnPeriodBand::Uncommon => "Uncommon",
            ReturnPeriodBand::Average => "Average",
            ReturnPeriodBand::Frequent => "Frequent",
        }
    }
}

/// Band a return period (years) for the summary table badge.
pub fn classify_return_period(years: f64) -> ReturnPeriodBand {
    if years >= 50.0 {
        ReturnPeriodBand::Rare
    } else if years >= 20.0 {
        ReturnPeriodBand::Uncommon
    } else if years >= 10.0 {
        ReturnPeriodBand::Average
    } else {
        ReturnPeriodBand::Frequent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_period_from_probability() {
        assert_eq!(return_period_years(1.0), Some(100));
        assert_eq!(return_period_years(2.0), Some(50));
        assert_eq!(return_period_years(50.0), Some(2));
        assert_eq!(return_period_years(100.0), Some(1));
        // 33% -> 3.03 years, rounds to 3
        assert_eq!(return_period_years(33.0), Some(3));
        assert_eq!(return_period_years(0.0), None);
        assert_eq!(return_period_years(-5.0), None);
        assert_eq!(return_period_years(f64::NAN), None);
    }

    #[test]
    fn canonical_filter_keeps_design_frequencies_only() {
        let probabilities = [1.0, 2.0, 4.0, 5.0, 10.0, 20.0, 25.0, 33.0, 50.0, 100.0];
        let retained: Vec<f64> = probabilities
            .iter()
            .copied()
            .filter(|p| is_canonical_probability(*p))
            .collect();
        assert_eq!(
            retained,
            vec![1.0, 2.0, 5.0, 10.0, 20.0, 25.0, 50.0, 100.0],
            "4% and 33% are not quoted design frequencies"
        );
    }

    #[test]
    fn canonical_filter_rejects_grid_edges() {
        // Backend grid values that round near a canonical frequency but
        // are not one.
        assert!(!is_canonical_probability(0.5));
        assert!(!is_canonical_probability(99.9));
        assert!(!is_canonical_probability(1.5));
        assert!(is_canonical_probability(25.0));
        // Two-decimal cells parse slightly off and still match.
        assert!(is_canonical_probability(20.001));
    }

    #[test]
    fn band_boundaries_inclusive() {
        assert_eq!(classify_return_period(100.0), ReturnPeriodBand::Rare);
        assert_eq!(classify_return_period(50.0), ReturnPeriodBand::Rare);
        assert_eq!(classify_return_period(49.9), ReturnPeriodBand::Uncommon);
        assert_eq!(classify_return_period(20.0), ReturnPeriodBand::Uncommon);
        assert_eq!(classify_return_period(10.0), ReturnPeriodBand::Average);
        assert_eq!(classify_return_period(5.0), ReturnPeriodBand::Frequent);
        assert_eq!(classify_return_period(1.0), ReturnPeriodBand::Frequent);
    }
}
