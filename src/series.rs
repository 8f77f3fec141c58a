// =============================================================================
// Series Normalizer — raw OHLCV records to an ordered immutable Series
// =============================================================================
//
// Raw records arrive as loosely-typed JSON (a REST backend or a CSV export
// converted upstream).  Normalization makes three guarantees:
//
//   1. Every numeric field is present — missing open/high/low/close/volume
//      zero-fill via serde defaults.  A zero-priced point is sentinel invalid
//      data, never a genuine zero-price trade; downstream consumers must
//      treat it as such.
//   2. Dates are parsed into `chrono::NaiveDate`.  A record whose date cannot
//      be parsed is skipped with a warning.
//   3. Ordering is trusted as already ascending by date.  The normalizer does
//      NOT re-sort; an out-of-order pair is logged at debug level and passed
//      through unchanged.
//
// The resulting `Series` is built once per render request, read-only, and
// discarded after the chart option is assembled.
// =============================================================================

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// =============================================================================
// Data types
// =============================================================================

/// A raw OHLCV record as delivered by the data feed.  Field names follow the
/// feed's capitalized convention; every numeric field tolerates absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open", default)]
    pub open: f64,
    #[serde(rename = "High", default)]
    pub high: f64,
    #[serde(rename = "Low", default)]
    pub low: f64,
    #[serde(rename = "Close", default)]
    pub close: f64,
    #[serde(rename = "Volume", default)]
    pub volume: f64,
}

/// One normalized daily price bar.
///
/// Expected (unenforced) invariant: `high >= max(open, close)` and
/// `low <= min(open, close)`.  The engine never relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Ordered, immutable sequence of price points.  Length N >= 0; every
/// downstream computation tolerates N = 0 and N = 1.
#[derive(Debug, Clone, Default)]
pub struct Series {
    points: Vec<PricePoint>,
}

// =============================================================================
// Normalization
// =============================================================================

/// Date formats accepted by the feed, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parse a feed date string.  ISO first, then the locale formats the feed has
/// been observed to emit.  RFC 3339 timestamps are accepted by truncation to
/// their date part.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    // RFC 3339 / ISO timestamp: keep the date part only.
    let date_part = trimmed.split(&['T', ' '][..]).next().unwrap_or(trimmed);
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("unrecognized date format: {raw:?}")
}

impl Series {
    /// Normalize raw feed records into an ordered `Series`.
    ///
    /// - Missing numeric fields have already been zero-filled by serde; a
    ///   zero close is logged as a suspect record but kept.
    /// - Records with unparseable dates are skipped.
    /// - Input order is trusted; nothing is re-sorted.
    /// - Empty input yields an empty series, never an error.
    pub fn normalize(records: &[RawRecord]) -> Series {
        let mut points: Vec<PricePoint> = Vec::with_capacity(records.len());

        for rec in records {
            let date = match parse_date(&rec.date) {
                Ok(d) => d,
                Err(e) => {
                    warn!(date = %rec.date, error = %e, "skipping record with unparseable date");
                    continue;
                }
            };

            if rec.close == 0.0 {
                warn!(date = %date, "record has zero/missing close — kept as sentinel invalid data");
            }

            if let Some(prev) = points.last().map(|p| p.date) {
                if prev >= date {
                    debug!(prev = %prev, next = %date, "non-ascending date pair passed through");
                }
            }

            points.push(PricePoint {
                date,
                open: rec.open,
                high: rec.high,
                low: rec.low,
                close: rec.close,
                volume: rec.volume,
            });
        }

        Series { points }
    }

    /// Build a series directly from already-typed points (tests, replays).
    pub fn from_points(points: Vec<PricePoint>) -> Series {
        Series { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Volumes, oldest first.
    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume).collect()
    }

    /// ISO date labels for the category x-axis, oldest first.
    pub fn date_labels(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect()
    }
}

/// Load raw records from a JSON array file (CLI entry point).
pub fn load_records(path: &str) -> Result<Vec<RawRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read OHLCV file: {path}"))?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&text).context("failed to parse OHLCV JSON array")?;
    Ok(records)
}
