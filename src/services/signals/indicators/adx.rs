//! Average Directional Index (ADX) series.
//!
//! Directional movement keeps both sides independent: +DM is any upward
//! high move, -DM is any downward low move, and both may be nonzero on the
//! same bar. DI and DX divisions fall back to 0 instead of producing
//! undefined values, and cells before the smoothing window read 0.0.

use super::{atr_series, exp_smooth};
use crate::types::Candle;

/// ADX over `period` bars, Wilder-smoothed (alpha = 1 / period).
pub fn adx_series(candles: &[Candle], period: usize) -> Vec<f64> {
    let n = candles.len();
    let mut out = vec![0.0; n];
    if period == 0 || n < 2 {
        return out;
    }

    let atr = atr_series(candles, period);

    // Directional movement, defined from index 1.
    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];
    for t in 1..n {
        plus_dm[t] = (candles[t].high - candles[t - 1].high).max(0.0);
        minus_dm[t] = (candles[t - 1].low - candles[t].low).max(0.0);
    }

    let alpha = 1.0 / period as f64;
    // Smoothed DM aligned to bar 1.. (slot i maps to bar i + 1).
    let plus_sm = exp_smooth(&plus_dm[1..], alpha);
    let minus_sm = exp_smooth(&minus_dm[1..], alpha);

    // First bar where both ATR and smoothed DM exist.
    let start = (period - 1).max(1);
    if start >= n {
        return out;
    }

    let mut dx = Vec::with_capacity(n - start);
    for t in start..n {
        let atr_t = atr[t].unwrap_or(0.0);
        let (plus_di, minus_di) = if atr_t > 0.0 {
            (
                100.0 * plus_sm[t - 1] / atr_t,
                100.0 * minus_sm[t - 1] / atr_t,
            )
        } else {
            (0.0, 0.0)
        };

        let di_sum = plus_di + minus_di;
        dx.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
    }

    let adx = exp_smooth(&dx, alpha);
    out[start..].copy_from_slice(&adx);
    out
}
