// =============================================================================
// Tooltip Formatter — the hover-text contract
// =============================================================================
//
// The renderer owns hover plumbing; this module owns the text.  The contract:
//
//   - open / close / high / low as 2-decimal currency
//   - percent change (close vs. open), signed, 2 decimals
//   - volume abbreviated: >= 1,000,000 => "M", >= 1,000 => "K"
//
// `TooltipSpec` serializes the contract parameters into the chart option and
// drives the reference formatters below, so the serialized contract and the
// server-side text can never diverge.
// =============================================================================

use serde::Serialize;

use crate::series::PricePoint;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Tooltip contract carried inside the chart option.  The same values
/// parameterize [`TooltipSpec::format_point`] and friends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipSpec {
    pub currency_symbol: String,
    pub price_decimals: usize,
    pub percent_decimals: usize,
    pub thousand_suffix: String,
    pub million_suffix: String,
}

impl Default for TooltipSpec {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            price_decimals: 2,
            percent_decimals: 2,
            thousand_suffix: "K".to_string(),
            million_suffix: "M".to_string(),
        }
    }
}

impl TooltipSpec {
    /// Format a price as currency per the contract.
    pub fn format_price(&self, value: f64) -> String {
        format!(
            "{}{value:.prec$}",
            self.currency_symbol,
            prec = self.price_decimals
        )
    }

    /// Signed percent change of close against open.  A zero open (sentinel
    /// invalid data) formats as a zero change rather than dividing by zero.
    pub fn format_change(&self, open: f64, close: f64) -> String {
        let pct = if open == 0.0 {
            0.0
        } else {
            (close - open) / open * 100.0
        };
        format!("{pct:+.prec$}%", prec = self.percent_decimals)
    }

    /// Abbreviate a volume figure at the K / M thresholds.
    pub fn format_volume(&self, volume: f64) -> String {
        if volume >= MILLION {
            format!("{:.2}{}", volume / MILLION, self.million_suffix)
        } else if volume >= THOUSAND {
            format!("{:.2}{}", volume / THOUSAND, self.thousand_suffix)
        } else {
            format!("{volume:.0}")
        }
    }

    /// Render the full hover text for one bar.
    pub fn format_point(&self, point: &PricePoint) -> String {
        format!(
            "{}\nO: {}  C: {}  H: {}  L: {}\nChg: {}  Vol: {}",
            point.date.format("%Y-%m-%d"),
            self.format_price(point.open),
            self.format_price(point.close),
            self.format_price(point.high),
            self.format_price(point.low),
            self.format_change(point.open, point.close),
            self.format_volume(point.volume),
        )
    }
}

/// Render the hover text for one bar under the default contract.
pub fn format_point(point: &PricePoint) -> String {
    TooltipSpec::default().format_point(point)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn price_is_two_decimal_currency() {
        let spec = TooltipSpec::default();
        assert_eq!(spec.format_price(1234.5), "$1234.50");
        assert_eq!(spec.format_price(0.005), "$0.01");
    }

    #[test]
    fn change_is_signed_percent() {
        let spec = TooltipSpec::default();
        assert_eq!(spec.format_change(100.0, 101.5), "+1.50%");
        assert_eq!(spec.format_change(100.0, 98.0), "-2.00%");
        assert_eq!(spec.format_change(100.0, 100.0), "+0.00%");
    }

    #[test]
    fn change_tolerates_zero_open() {
        // Zero-filled sentinel record must not divide by zero.
        assert_eq!(TooltipSpec::default().format_change(0.0, 42.0), "+0.00%");
    }

    #[test]
    fn volume_below_thousand_is_plain() {
        let spec = TooltipSpec::default();
        assert_eq!(spec.format_volume(999.0), "999");
        assert_eq!(spec.format_volume(0.0), "0");
    }

    #[test]
    fn volume_thousand_threshold() {
        let spec = TooltipSpec::default();
        assert_eq!(spec.format_volume(1_000.0), "1.00K");
        assert_eq!(spec.format_volume(432_100.0), "432.10K");
    }

    #[test]
    fn volume_million_threshold() {
        let spec = TooltipSpec::default();
        assert_eq!(spec.format_volume(1_000_000.0), "1.00M");
        assert_eq!(spec.format_volume(12_345_678.0), "12.35M");
    }

    #[test]
    fn contract_fields_drive_the_formatters() {
        // The serialized parameters and the rendered text come from the same
        // place; changing the spec must change the output.
        let spec = TooltipSpec {
            currency_symbol: "€".to_string(),
            price_decimals: 3,
            percent_decimals: 1,
            thousand_suffix: "k".to_string(),
            million_suffix: "m".to_string(),
        };
        assert_eq!(spec.format_price(12.5), "€12.500");
        assert_eq!(spec.format_change(100.0, 101.5), "+1.5%");
        assert_eq!(spec.format_volume(2_000.0), "2.00k");
        assert_eq!(spec.format_volume(3_000_000.0), "3.00m");
    }

    #[test]
    fn point_text_carries_all_fields() {
        let p = PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            open: 100.0,
            high: 105.0,
            low: 99.0,
            close: 102.0,
            volume: 2_500_000.0,
        };
        let text = format_point(&p);
        assert!(text.contains("2024-03-15"));
        assert!(text.contains("O: $100.00"));
        assert!(text.contains("C: $102.00"));
        assert!(text.contains("+2.00%"));
        assert!(text.contains("2.50M"));
    }
}
