//! Trading signals service module.
//!
//! Indicator computation, threshold classification, and per-instrument
//! transition tracking behind a single evaluation entry point.

pub mod classifier;
pub mod indicators;
pub mod tracker;

pub use classifier::classify;
pub use indicators::{IndicatorFrame, IndicatorRow};
pub use tracker::{SignalTracker, TrackerSnapshot, TrackerStore};

use crate::types::{CandleSeries, ChartRow, Signal, SignalReport};
use std::sync::Arc;
use tracing::debug;

/// Minimum candles before any indicator computation is attempted.
pub const MIN_CANDLES: usize = 30;

/// Most recent transitions exposed to callers.
pub const HISTORY_LIMIT: usize = 10;

/// Chart rows returned per report.
pub const CHART_ROWS: usize = 100;

/// Signal evaluation service: indicator frame, classification, tracker
/// update, report assembly. Candle retrieval stays with the caller.
pub struct SignalService {
    trackers: Arc<TrackerStore>,
}

impl SignalService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            trackers: TrackerStore::new(),
        })
    }

    /// Evaluate one instrument over its already-fetched candle series.
    pub fn evaluate(&self, asset: &str, series: &CandleSeries) -> SignalReport {
        self.evaluate_at(asset, series, chrono::Utc::now().timestamp_millis())
    }

    /// Evaluation with an explicit observation timestamp.
    ///
    /// Fewer than [`MIN_CANDLES`] candles short-circuits to a NONE report
    /// with an indicator-free chart; tracker state stays untouched.
    pub fn evaluate_at(&self, asset: &str, series: &CandleSeries, timestamp: i64) -> SignalReport {
        if series.len() < MIN_CANDLES {
            debug!(
                "{}: {} candles, need {} - indicators unavailable",
                asset,
                series.len(),
                MIN_CANDLES
            );
            let snapshot = self.trackers.snapshot(asset, HISTORY_LIMIT);
            return SignalReport {
                asset: asset.to_string(),
                signal: Signal::None,
                history: snapshot.history,
                stats: snapshot.stats,
                chart: chart_rows(series, None),
            };
        }

        let frame = IndicatorFrame::compute(series);
        let candles = series.candles();
        let latest_close = candles[candles.len() - 1].close;
        let previous_close = candles[candles.len() - 2].close;

        // Classification needs every cell of the latest row.
        let candidate = match frame.latest() {
            Some(row) => classify(&row, latest_close),
            None => Signal::None,
        };

        debug!("{}: candidate signal {}", asset, candidate.label());

        let snapshot = self.trackers.update(
            asset,
            candidate,
            previous_close,
            latest_close,
            timestamp,
            HISTORY_LIMIT,
        );

        SignalReport {
            asset: asset.to_string(),
            signal: candidate,
            history: snapshot.history,
            stats: snapshot.stats,
            chart: chart_rows(series, Some(&frame)),
        }
    }
}

/// Join the last [`CHART_ROWS`] candles with the frame, when one exists.
fn chart_rows(series: &CandleSeries, frame: Option<&IndicatorFrame>) -> Vec<ChartRow> {
    let candles = series.candles();
    let start = candles.len().saturating_sub(CHART_ROWS);
    candles[start..]
        .iter()
        .enumerate()
        .map(|(offset, c)| {
            let i = start + offset;
            ChartRow {
                time: c.time,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
                volume: c.volume,
                ema5: frame.map(|f| f.ema5[i]),
                ema20: frame.map(|f| f.ema20[i]),
                rsi: frame.and_then(|f| f.rsi[i]),
                macd: frame.map(|f| f.macd[i]),
                macd_signal: frame.map(|f| f.macd_signal[i]),
                atr: frame.and_then(|f| f.atr[i]),
                bb_mid: frame.and_then(|f| f.bb_mid[i]),
                bb_std: frame.and_then(|f| f.bb_std[i]),
                bb_upper: frame.and_then(|f| f.bb_upper[i]),
                bb_lower: frame.and_then(|f| f.bb_lower[i]),
                adx: frame.map(|f| f.adx[i]),
            }
        })
        .collect()
}
