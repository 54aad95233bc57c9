//! Average True Range (ATR) series.

use super::rolling_mean;
use crate::types::Candle;

/// True range per bar.
///
/// The first bar has no previous close, so its range is just high - low.
pub fn true_range_series(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(t, c)| {
            if t == 0 {
                c.high - c.low
            } else {
                let prev_close = candles[t - 1].close;
                (c.high - c.low)
                    .max((c.high - prev_close).abs())
                    .max((c.low - prev_close).abs())
            }
        })
        .collect()
}

/// ATR as the rolling simple mean of true range over `period` bars.
pub fn atr_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    rolling_mean(&true_range_series(candles), period)
}
