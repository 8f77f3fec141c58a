// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA(period); upper/lower = middle ± multiplier * σ, where σ
// is the POPULATION standard deviation of the same close window (divide by
// period, not period - 1).
//
// All three bands share the SMA's availability: `None` until the window
// fills.  Computed in one pass with a running sum of squares — the
// per-index variance falls out as E[x²] - E[x]².
// =============================================================================

use crate::indicators::sma::sma;

/// Upper / middle / lower band series, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Compute Bollinger bands over `closes`.
///
/// `upper[i] >= middle[i] >= lower[i]` holds wherever all three are defined,
/// for any `multiplier >= 0`.  On a flat window σ = 0 and the bands collapse
/// onto the middle line.
///
/// # Edge cases
/// - `period == 0` or empty input => all slots `None` / empty vecs
/// - window variance that rounds slightly negative is clamped to zero
pub fn bollinger(closes: &[f64], period: usize, multiplier: f64) -> BollingerBands {
    let middle = sma(closes, period);
    let mut upper = vec![None; closes.len()];
    let mut lower = vec![None; closes.len()];

    if period == 0 {
        return BollingerBands { upper, middle, lower };
    }

    // The window mean is already available as `middle[i]`; only the sum of
    // squares needs its own running tally.
    let mut sum_sq = 0.0;
    for (i, &close) in closes.iter().enumerate() {
        sum_sq += close * close;
        if i >= period {
            let old = closes[i - period];
            sum_sq -= old * old;
        }
        if let Some(mean) = middle[i] {
            // Population variance; floating-point cancellation can dip a hair
            // below zero on flat windows.
            let variance = (sum_sq / period as f64 - mean * mean).max(0.0);
            let std_dev = variance.sqrt();
            upper[i] = Some(mean + multiplier * std_dev);
            lower[i] = Some(mean - multiplier * std_dev);
        }
    }

    BollingerBands { upper, middle, lower }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_empty_input() {
        let bb = bollinger(&[], 20, 2.0);
        assert!(bb.upper.is_empty());
        assert!(bb.middle.is_empty());
        assert!(bb.lower.is_empty());
    }

    #[test]
    fn bollinger_availability_matches_sma() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let bb = bollinger(&closes, 20, 2.0);
        for i in 0..closes.len() {
            let expect = i >= 19;
            assert_eq!(bb.middle[i].is_some(), expect, "middle index {i}");
            assert_eq!(bb.upper[i].is_some(), expect, "upper index {i}");
            assert_eq!(bb.lower[i].is_some(), expect, "lower index {i}");
        }
    }

    #[test]
    fn bollinger_band_ordering() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 8.0)
            .collect();
        let bb = bollinger(&closes, 20, 2.0);
        for i in 0..closes.len() {
            if let (Some(u), Some(m), Some(l)) = (bb.upper[i], bb.middle[i], bb.lower[i]) {
                assert!(u >= m && m >= l, "ordering violated at {i}: {u} {m} {l}");
            }
        }
    }

    #[test]
    fn bollinger_flat_market_collapses_to_middle() {
        let closes = vec![100.0; 30];
        let bb = bollinger(&closes, 20, 2.0);
        for i in 19..closes.len() {
            assert!((bb.upper[i].unwrap() - 100.0).abs() < 1e-9);
            assert!((bb.middle[i].unwrap() - 100.0).abs() < 1e-9);
            assert!((bb.lower[i].unwrap() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn bollinger_zero_multiplier_equals_middle() {
        let closes: Vec<f64> = (1..=25).map(|x| x as f64 * 1.3).collect();
        let bb = bollinger(&closes, 10, 0.0);
        for i in 9..closes.len() {
            assert!((bb.upper[i].unwrap() - bb.middle[i].unwrap()).abs() < 1e-12);
            assert!((bb.lower[i].unwrap() - bb.middle[i].unwrap()).abs() < 1e-12);
        }
    }

    #[test]
    fn bollinger_matches_direct_population_stddev() {
        let closes = vec![22.27, 22.19, 22.08, 22.17, 22.18, 22.13, 22.23, 22.43, 22.24, 22.29];
        let period = 5;
        let bb = bollinger(&closes, period, 2.0);
        for i in period - 1..closes.len() {
            let window = &closes[i + 1 - period..=i];
            let mean = window.iter().sum::<f64>() / period as f64;
            let var = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
            let expect_upper = mean + 2.0 * var.sqrt();
            assert!((bb.upper[i].unwrap() - expect_upper).abs() < 1e-9, "index {i}");
        }
    }
}
