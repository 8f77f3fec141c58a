// =============================================================================
// Indicator Selection — one explicit configuration value for every toggle
// =============================================================================
//
// The chart UI exposes independent show/hide switches per indicator.  Instead
// of scattering mutable booleans across components, the full set travels as a
// single `IndicatorSelection` value passed into the engine.  Every field
// carries `#[serde(default)]` so a partial selection from an older client
// still deserializes.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_ma_periods() -> Vec<usize> {
    vec![5, 10, 20]
}

fn default_ema_periods() -> Vec<usize> {
    vec![12, 26]
}

/// Which indicators are enabled for a render, plus their periods.
///
/// MA and Bollinger are overlays on the price panel; volume, MACD and RSI
/// each occupy a panel of their own when enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSelection {
    #[serde(default = "default_true")]
    pub show_ma: bool,
    #[serde(default = "default_ma_periods")]
    pub ma_periods: Vec<usize>,
    #[serde(default)]
    pub show_ema: bool,
    #[serde(default = "default_ema_periods")]
    pub ema_periods: Vec<usize>,
    #[serde(default)]
    pub show_bollinger: bool,
    #[serde(default = "default_true")]
    pub show_volume: bool,
    #[serde(default)]
    pub show_macd: bool,
    #[serde(default)]
    pub show_rsi: bool,
}

impl Default for IndicatorSelection {
    fn default() -> Self {
        Self {
            show_ma: true,
            ma_periods: default_ma_periods(),
            show_ema: false,
            ema_periods: default_ema_periods(),
            show_bollinger: false,
            show_volume: true,
            show_macd: false,
            show_rsi: false,
        }
    }
}

impl IndicatorSelection {
    /// Selection with every toggle off — price candles only.
    pub fn none() -> Self {
        Self {
            show_ma: false,
            ma_periods: Vec::new(),
            show_ema: false,
            ema_periods: Vec::new(),
            show_bollinger: false,
            show_volume: false,
            show_macd: false,
            show_rsi: false,
        }
    }

    /// Selection with every indicator enabled (default MA/EMA periods).
    pub fn all() -> Self {
        Self {
            show_ma: true,
            ma_periods: default_ma_periods(),
            show_ema: true,
            ema_periods: default_ema_periods(),
            show_bollinger: true,
            show_volume: true,
            show_macd: true,
            show_rsi: true,
        }
    }
}
