// =============================================================================
// Vista Chart Engine
// =============================================================================
//
// Deterministic OHLCV technical-indicator engine and multi-panel chart
// composer.  Pipeline, leaf-first:
//
//   raw records -> Series (normalize) -> indicator outputs (pure, per-kind)
//               -> panel layout (fixed lookup table) -> ChartOption
//
// The crate performs no I/O and no drawing: the `ChartOption` artifact is a
// declarative description consumed by an external rendering collaborator.
// Every computation is synchronous and recomputed from scratch per request;
// N is bounded to at most a few hundred daily bars, so each indicator is a
// single O(N) pass.
//
// Caller obligations (outside this crate): the async data fetch that
// supplies input records must discard late responses for symbols no longer
// selected — by the time a Series reaches this engine it is assumed current.
// =============================================================================

pub mod chart;
pub mod indicators;
pub mod layout;
pub mod selection;
pub mod series;

pub use chart::{build_chart_option, ChartOption};
pub use indicators::{compute_indicators, IndicatorOutput};
pub use layout::{compose_panels, PanelRole, PanelSpec};
pub use selection::IndicatorSelection;
pub use series::{PricePoint, RawRecord, Series};
