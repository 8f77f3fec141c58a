// =============================================================================
// Chart Module — option types, tooltip contract, and the builder
// =============================================================================

pub mod builder;
pub mod option;
pub mod tooltip;

pub use builder::{build_chart_option, DOWN_COLOR, UP_COLOR};
pub use option::{ChartOption, ChartSeries, GridSpec, SeriesKind};
pub use tooltip::{format_point, TooltipSpec};
