//! Axis constants and range computation for the frequency chart.

/// Tick positions on the logarithmic probability axis, in percent.
pub const PROBABILITY_TICKS: [f64; 13] = [
    0.01, 0.1, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 80.0, 90.0, 95.0, 99.0, 99.9,
];

/// Vertical reference lines marking the 100-year and 10-year events.
pub const REFERENCE_PROBABILITIES: [f64; 2] = [1.0, 10.0];

/// Fraction of the data span added above and below the value axis.
const PADDING_FRACTION: f64 = 0.10;

/// Value-axis range over the combined series with a 10% margin on each
/// side. None when no finite value is present. A flat series pads
/// relative to its magnitude so the line does not sit on the frame.
pub fn padded_range<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.into_iter().filter(|v| v.is_finite()) {
        min = min.min(value);
        max = max.max(value);
    }
    if min > max {
        return None;
    }
    let span = max - min;
    let pad = if span > 0.0 {
        span * PADDING_FRACTION
    } else {
        (max.abs() * PADDING_FRACTION).max(1.0)
    };
    Some((min - pad, max + pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_adds_ten_percent_margin() {
        let (lo, hi) = padded_range([100.0, 200.0, 150.0]).unwrap();
        assert!((lo - 90.0).abs() < 1e-9);
        assert!((hi - 210.0).abs() < 1e-9);
    }

    #[test]
    fn padded_range_combines_series() {
        let theoretical = [120.0, 480.0];
        let empirical = [95.0, 510.0];
        let (lo, hi) = padded_range(theoretical.into_iter().chain(empirical)).unwrap();
        // span 415, pad 41.5
        assert!((lo - 53.5).abs() < 1e-9);
        assert!((hi - 551.5).abs() < 1e-9);
    }

    #[test]
    fn padded_range_ignores_non_finite_and_handles_empty() {
        assert_eq!(padded_range([]), None);
        assert_eq!(padded_range([f64::NAN, f64::INFINITY]), None);
        let (lo, hi) = padded_range([f64::NAN, 50.0, 100.0]).unwrap();
        assert!((lo - 45.0).abs() < 1e-9);
        assert!((hi - 105.0).abs() < 1e-9);
    }

    #[test]
    fn padded_range_flat_series_still_has_height() {
        let (lo, hi) = padded_range([300.0, 300.0]).unwrap();
        assert!(lo < 300.0 && hi > 300.0);
    }
}
