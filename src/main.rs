// =============================================================================
// Vista Chart — CLI Entry Point
// =============================================================================
//
// Reads an OHLCV JSON array from a file, normalizes it, and prints the full
// chart option as JSON.  Indicator toggles come from flags:
//
//   vista-chart <ohlcv.json> [--ma] [--ema] [--boll] [--volume] [--macd] [--rsi]
//
// With no flags the default selection applies (MA 5/10/20 + volume).
// =============================================================================

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vista_chart::{build_chart_option, series, IndicatorSelection, Series};

fn selection_from_flags(flags: &[String]) -> IndicatorSelection {
    if flags.is_empty() {
        return IndicatorSelection::default();
    }
    let mut sel = IndicatorSelection::none();
    for flag in flags {
        match flag.as_str() {
            "--ma" => {
                sel.show_ma = true;
                sel.ma_periods = vec![5, 10, 20];
            }
            "--ema" => {
                sel.show_ema = true;
                sel.ema_periods = vec![12, 26];
            }
            "--boll" => sel.show_bollinger = true,
            "--volume" => sel.show_volume = true,
            "--macd" => sel.show_macd = true,
            "--rsi" => sel.show_rsi = true,
            other => {
                tracing::warn!(flag = %other, "unknown flag ignored");
            }
        }
    }
    sel
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args
        .first()
        .context("usage: vista-chart <ohlcv.json> [--ma] [--ema] [--boll] [--volume] [--macd] [--rsi]")?;
    let flags = &args[1..];

    let records = series::load_records(path)?;
    let series = Series::normalize(&records);
    info!(records = records.len(), points = series.len(), "series normalized");

    let selection = selection_from_flags(flags);
    let option = build_chart_option(&series, &selection);
    info!(
        grids = option.grids.len(),
        series = option.series.len(),
        "chart option assembled"
    );

    println!("{}", serde_json::to_string_pretty(&option)?);
    Ok(())
}
