//! Histogram binning and descriptive statistics for the annual sample.
//!
//! The sample arrives as the `"Chỉ số"` column of the basic frequency
//! table. Non-positive and missing values are measurement gaps, not
//! zeros, and are dropped before binning.

use serde::Serialize;

/// A binned histogram ready for the chart bridge.
///
/// Bins are equal-width over `[min, max]` of the sample. Serialized
/// field names match what `histogram-chart.js` expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Lower edge of the first bin (the sample minimum).
    pub start: f64,
    /// Width of every bin.
    pub bin_width: f64,
    /// Sample count per bin.
    pub counts: Vec<u32>,
}

/// Descriptive statistics of the cleaned sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Keep finite, strictly positive values only.
pub fn clean_sample<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect()
}

/// Square-root choice with a floor of 3 bins.
pub fn bin_count(sample_size: usize) -> usize {
    ((sample_size as f64).sqrt().ceil() as usize).max(3)
}

/// Bin a cleaned sample. None when the sample is empty.
///
/// Every value lands in exactly one bin; the final bin's upper edge is
/// inclusive so the maximum is counted. A degenerate all-equal sample
/// gets a unit-width layout with everything in the first bin.
pub fn build_histogram(sample: &[f64]) -> Option<Histogram> {
    if sample.is_empty() {
        return None;
    }
    let bins = bin_count(sample.len());
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    let bin_width = if span > 0.0 { span / bins as f64 } else { 1.0 };

    let mut counts = vec![0u32; bins];
    for value in sample {
        let mut index = ((value - min) / bin_width) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    Some(Histogram {
        start: min,
        bin_width,
        counts,
    })
}

/// Count, min, max, mean of a cleaned sample. None when empty.
pub fn summarize(sample: &[f64]) -> Option<SampleSummary> {
    if sample.is_empty() {
        return None;
    }
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = sample.iter().sum::<f64>() / sample.len() as f64;
    Some(SampleSummary {
        count: sample.len(),
        min,
        max,
        mean,
    })
}

/// Every `step`-th element, always including the first. Used to thin the
/// theoretical curve down to a light density overlay.
pub fn sparse_sample<T: Clone>(items: &[T], step: usize) -> Vec<T> {
    if step <= 1 {
        return items.to_vec();
    }
    items.iter().step_by(step).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_sample_drops_invalid_values() {
        let raw = vec![
            Some(321.5),
            None,
            Some(0.0),
            Some(-14.0),
            Some(f64::NAN),
            Some(287.1),
        ];
        assert_eq!(clean_sample(raw), vec![321.5, 287.1]);
    }

    #[test]
    fn clean_sample_all_invalid_is_empty() {
        // Placeholder path: nothing valid to draw.
        let raw = vec![Some(0.0), Some(0.0), None, Some(-1.0)];
        assert!(clean_sample(raw).is_empty());
        assert!(build_histogram(&[]).is_none());
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn bin_count_sqrt_rule_with_floor() {
        assert_eq!(bin_count(16), 4);
        assert_eq!(bin_count(17), 5);
        assert_eq!(bin_count(2), 3, "floor enforced at 3 bins");
        assert_eq!(bin_count(1), 3);
        assert_eq!(bin_count(100), 10);
    }

    #[test]
    fn histogram_counts_cover_every_value() {
        // 16 values -> 4 bins over [10, 50], width 10.
        let sample: Vec<f64> = (0..16).map(|i| 10.0 + (i as f64) * (40.0 / 15.0)).collect();
        let histogram = build_histogram(&sample).unwrap();
        assert_eq!(histogram.counts.len(), 4);
        assert_eq!(histogram.counts.iter().sum::<u32>(), 16);
        assert_eq!(histogram.start, 10.0);
        assert!((histogram.bin_width - 10.0).abs() < 1e-9);
        // The maximum must land in the last bin, not overflow past it.
        assert!(histogram.counts[3] >= 1);
    }

    #[test]
    fn histogram_degenerate_sample() {
        let sample = vec![42.0, 42.0, 42.0, 42.0];
        let histogram = build_histogram(&sample).unwrap();
        assert_eq!(histogram.counts.len(), 3);
        assert_eq!(histogram.counts, vec![4, 0, 0]);
        assert_eq!(histogram.bin_width, 1.0);
    }

    #[test]
    fn summarize_basic_stats() {
        let summary = summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 40.0);
        assert_eq!(summary.mean, 25.0);
    }

    #[test]
    fn sparse_sample_every_twentieth() {
        let items: Vec<u32> = (0..100).collect();
        let thinned = sparse_sample(&items, 20);
        assert_eq!(thinned, vec![0, 20, 40, 60, 80]);
        assert_eq!(sparse_sample(&items, 1).len(), 100);
    }
}
