// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA weights recent prices more heavily than the SMA.
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_0 = close_0
//   EMA_t = close_t * k + EMA_{t-1} * (1 - k)
//
// The first value is seeded with the first close, so the EMA is defined at
// EVERY index — a deliberate contrast with the SMA's unavailable warm-up
// window.  The same seeding convention is used for the MACD signal line;
// do not introduce an SMA-seeded variant alongside this one.
// =============================================================================

/// Compute the EMA series aligned with `closes`, defined at every index.
///
/// # Edge cases
/// - empty input => empty vec
/// - N == 1 => `[closes[0]]`
/// - `period == 0` => k = 2, still well-defined; callers use period >= 1
pub fn ema(closes: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = closes.first() else {
        return Vec::new();
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(closes.len());
    out.push(first);

    let mut prev = first;
    for &close in &closes[1..] {
        let value = close * k + prev * (1.0 - k);
        out.push(value);
        prev = value;
    }
    out
}
