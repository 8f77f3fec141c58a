// =============================================================================
// Panel Layout Composer
// =============================================================================
//
// Turns the indicator selection into a stack of panels with fixed vertical
// shares.  The heights come from one lookup table keyed on which panels are
// enabled — the percentages are deliberately NOT derived arithmetically at
// the call sites, so every consumer agrees on the same numbers.
//
// Stacking order is fixed: Price, Volume, MACD, RSI.  MA and Bollinger are
// price-panel overlays and never consume a panel.  Only the bottommost panel
// shows x-axis labels; every panel shares one synchronized horizontal
// zoom/pan range.
//
// Geometry: a 5% top margin, then panels stacked without gaps.  The table
// keeps the total height at or under 85%, so the bottom edge never passes
// 90% and the axis-label strip always fits.
// =============================================================================

use serde::Serialize;

use crate::selection::IndicatorSelection;

/// Top margin above the first panel, percent of chart height.
pub const TOP_MARGIN_PCT: u32 = 5;

/// Horizontal margins shared by every panel, percent of chart width.
pub const LEFT_MARGIN_PCT: u32 = 8;
pub const RIGHT_MARGIN_PCT: u32 = 4;

/// What a panel displays.  Order of the variants is the stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRole {
    Price,
    Volume,
    Macd,
    Rsi,
}

/// One stacked horizontal chart region.
///
/// `axis_index` is the panel's position in the grid/xAxis/yAxis arrays of
/// the final chart option; series bind to their panel through it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSpec {
    pub role: PanelRole,
    pub top_pct: u32,
    pub height_pct: u32,
    pub axis_index: usize,
}

/// Fixed height lookup, keyed on the enabled-panel combination.
///
/// Price height depends only on how many extra panels are enabled
/// (0 => 80, 1 => 60, 2 => 45, 3 => 35).  Volume takes 25 when it is the
/// only extra panel, otherwise 20.  MACD takes 20 up to two extra panels,
/// otherwise 15.  RSI always takes 15.  Every combination sums to 85 or
/// less.
fn height_table(volume: bool, macd: bool, rsi: bool) -> (u32, u32, u32, u32) {
    match (volume, macd, rsi) {
        (false, false, false) => (80, 0, 0, 0),
        (true, false, false) => (60, 25, 0, 0),
        (false, true, false) => (60, 0, 20, 0),
        (false, false, true) => (60, 0, 0, 15),
        (true, true, false) => (45, 20, 20, 0),
        (true, false, true) => (45, 20, 0, 15),
        (false, true, true) => (45, 0, 20, 15),
        (true, true, true) => (35, 20, 15, 15),
    }
}

/// Compose the panel stack for the given selection.
///
/// The price panel is always present and always first; enabled extras follow
/// in fixed order with consecutive `axis_index` values and cumulative tops.
pub fn compose_panels(selection: &IndicatorSelection) -> Vec<PanelSpec> {
    let (price_h, volume_h, macd_h, rsi_h) =
        height_table(selection.show_volume, selection.show_macd, selection.show_rsi);

    let stack = [
        (PanelRole::Price, price_h),
        (PanelRole::Volume, volume_h),
        (PanelRole::Macd, macd_h),
        (PanelRole::Rsi, rsi_h),
    ];

    let mut panels = Vec::new();
    let mut top = TOP_MARGIN_PCT;
    for (role, height) in stack {
        if height == 0 {
            continue;
        }
        panels.push(PanelSpec {
            role,
            top_pct: top,
            height_pct: height,
            axis_index: panels.len(),
        });
        top += height;
    }
    panels
}

/// The panel a series with the given role binds to, if enabled.
pub fn panel_for(panels: &[PanelSpec], role: PanelRole) -> Option<&PanelSpec> {
    panels.iter().find(|p| p.role == role)
}
