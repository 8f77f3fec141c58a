// =============================================================================
// Chart Option Builder
// =============================================================================
//
// Final assembly stage: normalized series + indicator outputs + panel layout
// in, one declarative `ChartOption` out.
//
// Series placement:
//   - panel 0 (price): candlestick plus MA / Bollinger overlay lines
//   - volume panel: per-bar colored volume bars
//   - MACD panel: macd line, signal line, sign-colored histogram bars
//   - RSI panel: rsi line
//
// Coloring rules:
//   - candlestick: close >= open        => up color, else down
//   - volume bar:  close >= prev close  => up color, else down; bar 0
//     defaults to up — there is no prior bar to compare against
//   - histogram:   value >= 0           => up color, else down
// =============================================================================

use serde_json::{json, Value};
use tracing::debug;

use crate::chart::option::{
    CategoryAxis, ChartOption, ChartSeries, GridSpec, SeriesKind, ValueAxis, ZoomSpec,
};
use crate::chart::tooltip::TooltipSpec;
use crate::indicators::{compute_indicators, IndicatorOutput};
use crate::layout::{compose_panels, panel_for, PanelRole, LEFT_MARGIN_PCT, RIGHT_MARGIN_PCT};
use crate::selection::IndicatorSelection;
use crate::series::Series;

pub const UP_COLOR: &str = "#26a69a";
pub const DOWN_COLOR: &str = "#ef5350";

/// Overlay line palette, cycled over the configured MA periods.
const MA_COLORS: &[&str] = &["#f5a623", "#7b5ea7", "#2d8cf0", "#19be6b"];

const BOLLINGER_COLOR: &str = "#8d9bb3";
const MACD_LINE_COLOR: &str = "#2d8cf0";
const SIGNAL_LINE_COLOR: &str = "#f5a623";
const RSI_LINE_COLOR: &str = "#9b59b6";

/// Build the full chart option for one render request.
///
/// Empty series => the recoverable no-data placeholder, never an error.
pub fn build_chart_option(series: &Series, selection: &IndicatorSelection) -> ChartOption {
    if series.is_empty() {
        debug!("empty series — emitting no-data placeholder option");
        return ChartOption::no_data();
    }

    let panels = compose_panels(selection);
    let outputs = compute_indicators(series, selection);
    let labels = series.date_labels();

    // ── Grids & axes: one of each per panel, labels on the bottom only ──
    let grids: Vec<GridSpec> = panels
        .iter()
        .map(|p| GridSpec {
            left: format!("{LEFT_MARGIN_PCT}%"),
            right: format!("{RIGHT_MARGIN_PCT}%"),
            top: format!("{}%", p.top_pct),
            height: format!("{}%", p.height_pct),
        })
        .collect();

    let last_panel = panels.len() - 1;
    let x_axes: Vec<CategoryAxis> = panels
        .iter()
        .map(|p| CategoryAxis {
            grid_index: p.axis_index,
            data: labels.clone(),
            show_labels: p.axis_index == last_panel,
        })
        .collect();

    let y_axes: Vec<ValueAxis> = panels
        .iter()
        .map(|p| ValueAxis {
            grid_index: p.axis_index,
            scale: matches!(p.role, PanelRole::Price | PanelRole::Macd),
        })
        .collect();

    // ── Series assembly, draw order: price, overlays, volume, macd, rsi ──
    let mut chart_series = Vec::new();

    chart_series.push(candlestick_series(series));

    for output in &outputs {
        match output {
            IndicatorOutput::Sma { period, values } => {
                let color = MA_COLORS[chart_series.len() % MA_COLORS.len()];
                chart_series.push(overlay_line(
                    format!("MA{period}"),
                    optional_data(values),
                    color,
                ));
            }
            IndicatorOutput::Ema { period, values } => {
                let color = MA_COLORS[chart_series.len() % MA_COLORS.len()];
                chart_series.push(overlay_line(
                    format!("EMA{period}"),
                    plain_data(values),
                    color,
                ));
            }
            IndicatorOutput::Bollinger { upper, middle, lower, .. } => {
                chart_series.push(overlay_line(
                    "BOLL Upper".to_string(),
                    optional_data(upper),
                    BOLLINGER_COLOR,
                ));
                chart_series.push(overlay_line(
                    "BOLL Mid".to_string(),
                    optional_data(middle),
                    BOLLINGER_COLOR,
                ));
                chart_series.push(overlay_line(
                    "BOLL Lower".to_string(),
                    optional_data(lower),
                    BOLLINGER_COLOR,
                ));
            }
            IndicatorOutput::Macd { .. } | IndicatorOutput::Rsi { .. } => {
                // Panel-bound series handled below, once their panel is known.
            }
        }
    }

    if let Some(panel) = panel_for(&panels, PanelRole::Volume) {
        chart_series.push(volume_series(series, panel.axis_index));
    }

    if let Some(panel) = panel_for(&panels, PanelRole::Macd) {
        for output in &outputs {
            if let IndicatorOutput::Macd { macd, signal, histogram, .. } = output {
                chart_series.push(panel_line(
                    "MACD".to_string(),
                    plain_data(macd),
                    panel.axis_index,
                    MACD_LINE_COLOR,
                ));
                chart_series.push(panel_line(
                    "Signal".to_string(),
                    plain_data(signal),
                    panel.axis_index,
                    SIGNAL_LINE_COLOR,
                ));
                chart_series.push(histogram_series(histogram, panel.axis_index));
            }
        }
    }

    if let Some(panel) = panel_for(&panels, PanelRole::Rsi) {
        for output in &outputs {
            if let IndicatorOutput::Rsi { values, .. } = output {
                chart_series.push(panel_line(
                    "RSI".to_string(),
                    plain_data(values),
                    panel.axis_index,
                    RSI_LINE_COLOR,
                ));
            }
        }
    }

    let legend: Vec<String> = chart_series.iter().map(|s| s.name.clone()).collect();
    let zoom = ZoomSpec {
        x_axis_indices: (0..panels.len()).collect(),
    };

    ChartOption {
        title: None,
        grids,
        x_axes,
        y_axes,
        series: chart_series,
        legend,
        tooltip: TooltipSpec::default(),
        zoom,
    }
}

// =============================================================================
// Series constructors
// =============================================================================

/// Candlestick data point order follows the renderer convention:
/// `[open, close, low, high]`.
fn candlestick_series(series: &Series) -> ChartSeries {
    let data: Vec<Value> = series
        .points()
        .iter()
        .map(|p| json!([p.open, p.close, p.low, p.high]))
        .collect();

    ChartSeries {
        name: "Price".to_string(),
        kind: SeriesKind::Candlestick,
        x_axis_index: 0,
        y_axis_index: 0,
        data: Value::Array(data),
        style: json!({ "up_color": UP_COLOR, "down_color": DOWN_COLOR }),
    }
}

/// Volume bars, each carrying its own color so the renderer needs no
/// comparison logic.  Bar i is up-colored when its close is at or above the
/// previous close; bar 0 is up by default.
fn volume_series(series: &Series, axis_index: usize) -> ChartSeries {
    let points = series.points();
    let data: Vec<Value> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let up = i == 0 || p.close >= points[i - 1].close;
            json!({
                "value": p.volume,
                "color": if up { UP_COLOR } else { DOWN_COLOR },
            })
        })
        .collect();

    ChartSeries {
        name: "Volume".to_string(),
        kind: SeriesKind::Bar,
        x_axis_index: axis_index,
        y_axis_index: axis_index,
        data: Value::Array(data),
        style: json!({}),
    }
}

fn histogram_series(values: &[f64], axis_index: usize) -> ChartSeries {
    let data: Vec<Value> = values
        .iter()
        .map(|&v| {
            json!({
                "value": v,
                "color": if v >= 0.0 { UP_COLOR } else { DOWN_COLOR },
            })
        })
        .collect();

    ChartSeries {
        name: "Histogram".to_string(),
        kind: SeriesKind::Bar,
        x_axis_index: axis_index,
        y_axis_index: axis_index,
        data: Value::Array(data),
        style: json!({}),
    }
}

/// Overlay line on the price panel (axis 0).
fn overlay_line(name: String, data: Value, color: &str) -> ChartSeries {
    panel_line(name, data, 0, color)
}

fn panel_line(name: String, data: Value, axis_index: usize, color: &str) -> ChartSeries {
    ChartSeries {
        name,
        kind: SeriesKind::Line,
        x_axis_index: axis_index,
        y_axis_index: axis_index,
        data,
        style: json!({ "color": color, "width": 1 }),
    }
}

// =============================================================================
// Data conversion
// =============================================================================

/// `None` slots become JSON null so the renderer leaves warm-up gaps.
fn optional_data(values: &[Option<f64>]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|v| match v {
                Some(x) => json!(x),
                None => Value::Null,
            })
            .collect(),
    )
}

fn plain_data(values: &[f64]) -> Value {
    Value::Array(values.iter().map(|&v| json!(v)).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::PricePoint;
    use chrono::NaiveDate;

    fn test_series(closes: &[f64]) -> Series {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64),
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 10_000.0 + i as f64,
            })
            .collect();
        Series::from_points(points)
    }

    fn find<'a>(opt: &'a ChartOption, name: &str) -> &'a ChartSeries {
        opt.series
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("series {name} missing"))
    }

    #[test]
    fn empty_series_yields_no_data_placeholder() {
        let opt = build_chart_option(&Series::from_points(vec![]), &IndicatorSelection::all());
        assert!(opt.is_no_data());
    }

    #[test]
    fn price_only_option_has_one_grid() {
        let opt = build_chart_option(&test_series(&[100.0; 10]), &IndicatorSelection::none());
        assert_eq!(opt.grids.len(), 1);
        assert_eq!(opt.series.len(), 1);
        assert_eq!(opt.series[0].kind, SeriesKind::Candlestick);
    }

    #[test]
    fn volume_toggle_adds_lookup_height_grid() {
        let series = test_series(&[100.0; 10]);
        let mut sel = IndicatorSelection::none();
        let before = build_chart_option(&series, &sel);
        sel.show_volume = true;
        let after = build_chart_option(&series, &sel);

        assert_eq!(before.grids.len(), 1);
        assert_eq!(after.grids.len(), 2);
        assert_eq!(after.grids[1].height, "25%");
    }

    #[test]
    fn candlestick_data_is_open_close_low_high() {
        let opt = build_chart_option(&test_series(&[100.0]), &IndicatorSelection::none());
        let data = opt.series[0].data.as_array().unwrap();
        let bar = data[0].as_array().unwrap();
        assert_eq!(bar[0], 99.5); // open
        assert_eq!(bar[1], 100.0); // close
        assert_eq!(bar[2], 99.0); // low
        assert_eq!(bar[3], 101.0); // high
    }

    #[test]
    fn sma_warmup_serializes_as_null() {
        let sel = IndicatorSelection {
            show_ma: true,
            ma_periods: vec![5],
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&test_series(&[100.0; 10]), &sel);
        let ma = find(&opt, "MA5");
        let data = ma.data.as_array().unwrap();
        assert!(data[0].is_null());
        assert!(data[3].is_null());
        assert!(data[4].is_number());
    }

    #[test]
    fn ema_overlay_rides_price_panel_with_no_gaps() {
        // EMA is defined from index 0, so unlike the MA overlay its data
        // carries no warm-up nulls; it binds to the price panel and shows
        // up in the legend under its period name.
        let sel = IndicatorSelection {
            show_ema: true,
            ema_periods: vec![12, 26],
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&test_series(&[100.0; 30]), &sel);
        assert_eq!(opt.grids.len(), 1);
        for name in ["EMA12", "EMA26"] {
            let ema = find(&opt, name);
            assert_eq!(ema.kind, SeriesKind::Line);
            assert_eq!(ema.x_axis_index, 0);
            let data = ema.data.as_array().unwrap();
            assert_eq!(data.len(), 30);
            assert!(data.iter().all(|v| v.is_number()));
        }
        assert!(opt.legend.contains(&"EMA12".to_string()));
    }

    #[test]
    fn volume_bar_zero_defaults_up() {
        // Falling close at index 1 must color down, index 0 up by default.
        let series = test_series(&[100.0, 90.0, 95.0]);
        let sel = IndicatorSelection {
            show_volume: true,
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&series, &sel);
        let vol = find(&opt, "Volume");
        let data = vol.data.as_array().unwrap();
        assert_eq!(data[0]["color"], UP_COLOR);
        assert_eq!(data[1]["color"], DOWN_COLOR);
        assert_eq!(data[2]["color"], UP_COLOR);
    }

    #[test]
    fn legend_lists_enabled_series_only() {
        let sel = IndicatorSelection {
            show_ma: true,
            ma_periods: vec![5, 10],
            show_volume: true,
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&test_series(&[100.0; 20]), &sel);
        assert_eq!(opt.legend, vec!["Price", "MA5", "MA10", "Volume"]);
    }

    #[test]
    fn macd_and_rsi_bind_to_their_panels() {
        let sel = IndicatorSelection {
            show_volume: true,
            show_macd: true,
            show_rsi: true,
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&test_series(&[100.0; 40]), &sel);
        assert_eq!(opt.grids.len(), 4);
        assert_eq!(find(&opt, "MACD").x_axis_index, 2);
        assert_eq!(find(&opt, "Signal").x_axis_index, 2);
        assert_eq!(find(&opt, "Histogram").x_axis_index, 2);
        assert_eq!(find(&opt, "RSI").x_axis_index, 3);
    }

    #[test]
    fn only_bottom_panel_shows_axis_labels() {
        let sel = IndicatorSelection {
            show_volume: true,
            show_rsi: true,
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&test_series(&[100.0; 10]), &sel);
        let shown: Vec<bool> = opt.x_axes.iter().map(|a| a.show_labels).collect();
        assert_eq!(shown, vec![false, false, true]);
    }

    #[test]
    fn zoom_spans_every_panel() {
        let sel = IndicatorSelection {
            show_volume: true,
            show_macd: true,
            ..IndicatorSelection::none()
        };
        let opt = build_chart_option(&test_series(&[100.0; 10]), &sel);
        assert_eq!(opt.zoom.x_axis_indices, vec![0, 1, 2]);
    }

    #[test]
    fn single_point_series_builds_without_panic() {
        let opt = build_chart_option(&test_series(&[42.0]), &IndicatorSelection::all());
        assert!(!opt.is_no_data());
        assert_eq!(opt.x_axes[0].data.len(), 1);
    }
}
