// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing, placeholder warm-up
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes on a bounded
// [0, 100] scale.
//
// Step 1 — Close-to-close deltas classify into gains and losses.
// Step 2 — While the warm-up window fills (i < period) the averages
//          accumulate as simple running means and the output emits the fixed
//          placeholder value 50.0.  The placeholder is the shipped warm-up
//          convention; downstream UI relies on it, so it is NOT NaN and NOT
//          an unavailable slot.
// Step 3 — From i >= period, Wilder's smoothing:
//            avg_gain = (avg_gain * (period - 1) + gain) / period
//            avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//          A zero avg_loss is substituted by ε = 0.001; when BOTH averages
//          are zero (no movement at all) the value is the neutral 50.
// =============================================================================

/// Substituted for a zero average loss so RS never divides by zero.
const LOSS_EPSILON: f64 = 0.001;

/// Neutral value: warm-up placeholder and the no-movement result.
const NEUTRAL_RSI: f64 = 50.0;

/// Compute the RSI series aligned with `closes`, defined at every index.
///
/// Output is always within [0, 100].
///
/// # Edge cases
/// - empty input => empty vec
/// - N == 1 => `[50.0]` (no delta yet)
/// - a perfectly flat series stays at 50 (both averages zero => neutral)
/// - `period == 0` => all neutral (the Wilder recurrence needs a window)
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![NEUTRAL_RSI; closes.len()];
    }
    let mut out = Vec::with_capacity(closes.len());
    if closes.is_empty() {
        return out;
    }

    // Index 0 has no prior close — always part of the warm-up.
    out.push(NEUTRAL_RSI);

    let period_f = period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { -delta } else { 0.0 };

        if i < period {
            // Simple running mean over the i deltas seen so far.
            let n = i as f64;
            avg_gain = (avg_gain * (n - 1.0) + gain) / n;
            avg_loss = (avg_loss * (n - 1.0) + loss) / n;
            out.push(NEUTRAL_RSI);
        } else {
            avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
            avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
            out.push(rsi_from_averages(avg_gain, avg_loss));
        }
    }

    out
}

/// Convert smoothed averages into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain == 0.0 && avg_loss == 0.0 {
        return NEUTRAL_RSI; // No movement at all.
    }
    let effective_loss = if avg_loss == 0.0 { LOSS_EPSILON } else { avg_loss };
    let rs = avg_gain / effective_loss;
    100.0 - 100.0 / (1.0 + rs)
}
