// =============================================================================
// Indicator Engine
// =============================================================================
//
// Pure, side-effect-free implementations of the chart indicators.  Every
// function is total over well-typed numeric input: N = 0 and N = 1 return
// degenerate-but-valid output, never a panic.  Each output is aligned
// index-for-index with the input series; slots before a window fills carry
// the explicit `None` sentinel (SMA / Bollinger), while the recurrence-based
// indicators (EMA / RSI / MACD) are defined at every index.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

use serde::Serialize;

use crate::selection::IndicatorSelection;
use crate::series::Series;

pub use bollinger::{bollinger, BollingerBands};
pub use ema::ema;
pub use macd::{macd, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;

/// Default Bollinger window and multiplier.
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;

/// Default RSI period (Wilder).
pub const RSI_PERIOD: usize = 14;

/// Default MACD periods.
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// One computed indicator, tagged by kind so consumers pattern-match
/// exhaustively instead of probing loose result objects for optional fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorOutput {
    Sma {
        period: usize,
        values: Vec<Option<f64>>,
    },
    Ema {
        period: usize,
        values: Vec<f64>,
    },
    Bollinger {
        period: usize,
        multiplier: f64,
        upper: Vec<Option<f64>>,
        middle: Vec<Option<f64>>,
        lower: Vec<Option<f64>>,
    },
    Rsi {
        period: usize,
        values: Vec<f64>,
    },
    Macd {
        fast: usize,
        slow: usize,
        signal_period: usize,
        macd: Vec<f64>,
        signal: Vec<f64>,
        histogram: Vec<f64>,
    },
}

/// Run every enabled indicator over the series, each independently and from
/// scratch.  N is bounded (tens to low hundreds of daily bars), so a full
/// O(N)-per-indicator recompute on every toggle is the whole model — there
/// is no incremental state to invalidate.
pub fn compute_indicators(series: &Series, selection: &IndicatorSelection) -> Vec<IndicatorOutput> {
    let closes = series.closes();
    let mut outputs = Vec::new();

    if selection.show_ma {
        for &period in &selection.ma_periods {
            outputs.push(IndicatorOutput::Sma {
                period,
                values: sma(&closes, period),
            });
        }
    }

    if selection.show_ema {
        for &period in &selection.ema_periods {
            outputs.push(IndicatorOutput::Ema {
                period,
                values: ema(&closes, period),
            });
        }
    }

    if selection.show_bollinger {
        let bands = bollinger(&closes, BOLLINGER_PERIOD, BOLLINGER_MULTIPLIER);
        outputs.push(IndicatorOutput::Bollinger {
            period: BOLLINGER_PERIOD,
            multiplier: BOLLINGER_MULTIPLIER,
            upper: bands.upper,
            middle: bands.middle,
            lower: bands.lower,
        });
    }

    if selection.show_macd {
        let triple = macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        outputs.push(IndicatorOutput::Macd {
            fast: MACD_FAST,
            slow: MACD_SLOW,
            signal_period: MACD_SIGNAL,
            macd: triple.macd,
            signal: triple.signal,
            histogram: triple.histogram,
        });
    }

    if selection.show_rsi {
        outputs.push(IndicatorOutput::Rsi {
            period: RSI_PERIOD,
            values: rsi(&closes, RSI_PERIOD),
        });
    }

    outputs
}
