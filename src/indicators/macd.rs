// =============================================================================
// Moving Average Convergence-Divergence (MACD)
// =============================================================================
//
//   macd[i]      = EMA(fast)[i] - EMA(slow)[i]
//   signal[i]    = EMA(macd series, signal_period)[i]
//   histogram[i] = macd[i] - signal[i]
//
// All three curves use the single first-value-seeded EMA from `ema.rs`, so
// the triple is defined at every index and shares one seeding convention.
// Do not mix in an SMA-seeded warm-up for any of the curves.
// =============================================================================

use crate::indicators::ema::ema;

/// The macd / signal / histogram triple, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD over `closes` with the given periods (conventionally
/// 12 / 26 / 9).
///
/// `histogram[i] == macd[i] - signal[i]` exactly, at every index.
///
/// # Edge cases
/// - empty input => three empty vecs
/// - N == 1 => macd = [0.0] (both EMAs seed with the same close),
///   signal = [0.0], histogram = [0.0]
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();

    let signal = ema(&macd, signal_period);

    let histogram: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
