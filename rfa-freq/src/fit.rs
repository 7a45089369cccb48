//! Display tiers for backend goodness-of-fit statistics.
//!
//! The evaluation panel never recomputes statistics; it only maps the
//! shipped numbers onto qualitative tiers for badges and progress bars.

/// Adequacy of a chi-square goodness-of-fit p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PValueTier {
    /// p >= 0.05, conventional acceptance.
    Adequate,
    /// 0.01 <= p < 0.05.
    Borderline,
    /// p < 0.01.
    Inadequate,
}

impl PValueTier {
    pub fn label(self) -> &'static str {
        match self {
            PValueTier::Adequate => "Adequate",
            PValueTier::Borderline => "Borderline",
            PValueTier::Inadequate => "Inadequate",
        }
    }
}

/// Classify a p-value into its display tier.
pub fn classify_p_value(p_value: f64) -> PValueTier {
    if p_value >= 0.05 {
        PValueTier::Adequate
    } else if p_value >= 0.01 {
        PValueTier::Borderline
    } else {
        PValueTier::Inadequate
    }
}

/// Relative model support from the AIC delta (AIC minus the candidate
/// minimum), the standard Burnham-Anderson reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AicTier {
    /// delta <= 2: substantially supported.
    Best,
    /// delta <= 7: considerably less support.
    Good,
    /// delta <= 10: little support.
    Fair,
    /// delta > 10: essentially none.
    Poor,
}

impl AicTier {
    pub fn label(self) -> &'static str {
        match self {
            AicTier::Best => "Best",
            AicTier::Good => "Good",
            AicTier::Fair => "Fair",
            AicTier::Poor => "Poor",
        }
    }
}

/// Classify an AIC delta into its display tier.
pub fn classify_aic_delta(delta: f64) -> AicTier {
    if delta <= 2.0 {
        AicTier::Best
    } else if delta <= 7.0 {
        AicTier::Good
    } else if delta <= 10.0 {
        AicTier::Fair
    } else {
        AicTier::Poor
    }
}

/// Minimum AIC across candidates, skipping the ones the backend could
/// not score. None when no candidate has an AIC at all.
pub fn min_aic<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.min(v)))
        })
}

/// Color tier for 0-100 score progress bars (quality score, completeness).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// score >= 80.
    High,
    /// 60 <= score < 80.
    Medium,
    /// score < 60.
    Low,
}

/// Classify a 0-100 score for progress bar coloring.
pub fn classify_score(score: f64) -> ScoreTier {
    if score >= 80.0 {
        ScoreTier::High
    } else if score >= 60.0 {
        ScoreTier::Medium
    } else {
        ScoreTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_value_tier_boundaries() {
        assert_eq!(classify_p_value(0.05), PValueTier::Adequate);
        assert_eq!(classify_p_value(0.21), PValueTier::Adequate);
        assert_eq!(classify_p_value(0.049), PValueTier::Borderline);
        assert_eq!(classify_p_value(0.01), PValueTier::Borderline);
        assert_eq!(classify_p_value(0.009), PValueTier::Inadequate);
        assert_eq!(classify_p_value(0.0), PValueTier::Inadequate);
    }

    #[test]
    fn aic_delta_tiers_for_candidate_set() {
        // AICs {10, 12, 17, 25} against minimum 10 give deltas {0, 2, 7, 15}.
        let aics = [10.0, 12.0, 17.0, 25.0];
        let min = min_aic(aics.iter().map(|a| Some(*a))).unwrap();
        assert_eq!(min, 10.0);

        let tiers: Vec<AicTier> = aics.iter().map(|a| classify_aic_delta(a - min)).collect();
        assert_eq!(
            tiers,
            vec![AicTier::Best, AicTier::Best, AicTier::Good, AicTier::Poor]
        );
    }

    #[test]
    fn aic_delta_boundaries_inclusive() {
        assert_eq!(classify_aic_delta(2.0), AicTier::Best);
        assert_eq!(classify_aic_delta(7.0), AicTier::Good);
        assert_eq!(classify_aic_delta(10.0), AicTier::Fair);
        assert_eq!(classify_aic_delta(10.001), AicTier::Poor);
    }

    #[test]
    fn min_aic_skips_missing_and_non_finite() {
        assert_eq!(min_aic([Some(412.3), None, Some(418.9)]), Some(412.3));
        assert_eq!(min_aic([None, Some(f64::NAN), Some(5.0)]), Some(5.0));
        assert_eq!(min_aic([None, None]), None);
        assert_eq!(min_aic(std::iter::empty()), None);
    }

    #[test]
    fn score_tiers() {
        assert_eq!(classify_score(96.0), ScoreTier::High);
        assert_eq!(classify_score(80.0), ScoreTier::High);
        assert_eq!(classify_score(60.0), ScoreTier::Medium);
        assert_eq!(classify_score(59.9), ScoreTier::Low);
    }
}
