// =============================================================================
// Chart Option — the declarative artifact handed to the renderer
// =============================================================================
//
// The engine never draws.  Its entire output is one immutable, serializable
// description — grids, axes, series, legend, tooltip contract — that an
// external charting library consumes.  Structured fields are typed; the
// free-form per-series style blobs stay as `serde_json::Value`, matching the
// renderer's loosely-typed option schema.
// =============================================================================

use serde::Serialize;
use serde_json::Value;

use crate::chart::tooltip::TooltipSpec;

/// One chart grid (a panel's rectangle), all sides in percent strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSpec {
    pub left: String,
    pub right: String,
    pub top: String,
    pub height: String,
}

/// Category x-axis bound to one grid.  Labels show only on the bottommost
/// panel; the data vector is shared (same dates on every panel).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub grid_index: usize,
    pub data: Vec<String>,
    pub show_labels: bool,
}

/// Value y-axis bound to one grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    pub grid_index: usize,
    /// Scale to the visible data range instead of anchoring at zero.
    pub scale: bool,
}

/// Renderer series type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Candlestick,
    Line,
    Bar,
}

/// One renderable series bound to a panel through its axis indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
    /// Data points; unavailable indicator slots serialize as JSON null so
    /// the renderer leaves gaps instead of drawing to zero.
    pub data: Value,
    /// Free-form renderer style blob (colors, line width, ...).
    pub style: Value,
}

/// Synchronized horizontal zoom/pan across every panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomSpec {
    pub x_axis_indices: Vec<usize>,
}

/// The complete chart description.  Built once per render request and
/// treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOption {
    /// Set only for the no-data placeholder.
    pub title: Option<String>,
    pub grids: Vec<GridSpec>,
    pub x_axes: Vec<CategoryAxis>,
    pub y_axes: Vec<ValueAxis>,
    pub series: Vec<ChartSeries>,
    /// Names of the enabled series, in draw order.
    pub legend: Vec<String>,
    pub tooltip: TooltipSpec,
    pub zoom: ZoomSpec,
}

impl ChartOption {
    /// Recoverable placeholder for an empty or insufficient input series:
    /// a single empty grid with a title, no series, nothing to zoom.
    pub fn no_data() -> ChartOption {
        ChartOption {
            title: Some("No data".to_string()),
            grids: vec![GridSpec {
                left: "8%".to_string(),
                right: "4%".to_string(),
                top: "5%".to_string(),
                height: "80%".to_string(),
            }],
            x_axes: Vec::new(),
            y_axes: Vec::new(),
            series: Vec::new(),
            legend: Vec::new(),
            tooltip: TooltipSpec::default(),
            zoom: ZoomSpec {
                x_axis_indices: Vec::new(),
            },
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.series.is_empty() && self.title.is_some()
    }
}
