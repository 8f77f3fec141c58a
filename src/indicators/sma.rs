// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// SMA_i = mean(close[i-p+1..=i]), defined once the window has filled.
// Earlier slots carry the explicit `None` sentinel so the output stays
// aligned index-for-index with the input series.
//
// Computed with a running sum in O(N) — the naive per-index window sum is
// O(N*p) and shows on long histories.
// =============================================================================

/// Compute the SMA series aligned with `closes`.
///
/// `out[i]` is `Some(mean)` iff `i >= period - 1`, otherwise `None`.
///
/// # Edge cases
/// - `period == 0` => all `None` (no window ever fills)
/// - empty input => empty vec
/// - `period > closes.len()` => all `None`
pub fn sma(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 {
        return out;
    }

    let mut running_sum = 0.0;
    for (i, &close) in closes.iter().enumerate() {
        running_sum += close;
        if i >= period {
            running_sum -= closes[i - period];
        }
        if i + 1 >= period {
            out[i] = Some(running_sum / period as f64);
        }
    }
    out
}
