//! Technical indicator implementations.
//!
//! Every indicator is computed over the whole candle series and returns a
//! column aligned 1:1 with it. Cells stay unavailable (`None`) until the
//! indicator's lookback window is satisfied; ADX zero-fills instead.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use adx::adx_series;
pub use atr::{atr_series, true_range_series};
pub use bollinger::{bollinger_series, BollingerSeries};
pub use ema::ema_series;
pub use macd::{macd_series, MacdSeries};
pub use rsi::rsi_series;

use crate::types::CandleSeries;

/// Recursive exponential smoothing seeded with the first value:
/// `s[t] = alpha * x[t] + (1 - alpha) * s[t - 1]`.
pub(crate) fn exp_smooth(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev = match values.first() {
        Some(&v) => v,
        None => return out,
    };
    out.push(prev);
    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// Rolling simple mean; a cell is available once `window` values ending at
/// it exist.
pub(crate) fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);
    for t in window..values.len() {
        sum += values[t] - values[t - window];
        out[t] = Some(sum / window as f64);
    }
    out
}

/// One fully-available frame row, as consumed by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRow {
    pub ema5: f64,
    pub ema20: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub atr: f64,
    pub bb_mid: f64,
    pub bb_std: f64,
    pub bb_upper: f64,
    pub bb_lower: f64,
    pub adx: f64,
}

/// Indicator columns aligned 1:1 with a candle series.
///
/// EMA-family columns are defined from the first sample (seeded EMAs); the
/// windowed columns are `None` until warm; ADX carries an explicit 0.0
/// before its smoothing window.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub ema5: Vec<f64>,
    pub ema20: Vec<f64>,
    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
    pub rsi: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
    pub bb_mid: Vec<Option<f64>>,
    pub bb_std: Vec<Option<f64>>,
    pub bb_upper: Vec<Option<f64>>,
    pub bb_lower: Vec<Option<f64>>,
    pub adx: Vec<f64>,
}

impl IndicatorFrame {
    /// Compute the full battery over a candle series.
    ///
    /// Periods are fixed: EMA 5/20, RSI 14, MACD 12/26/9, ATR 14,
    /// Bollinger 20 with k = 2, ADX 14.
    pub fn compute(series: &CandleSeries) -> Self {
        let closes = series.closes();
        let candles = series.candles();

        let MacdSeries { macd, signal } = macd_series(&closes);
        let BollingerSeries {
            mid,
            std,
            upper,
            lower,
        } = bollinger_series(&closes, 20, 2.0);

        Self {
            ema5: ema_series(&closes, 5),
            ema20: ema_series(&closes, 20),
            macd,
            macd_signal: signal,
            rsi: rsi_series(&closes, 14),
            atr: atr_series(candles, 14),
            bb_mid: mid,
            bb_std: std,
            bb_upper: upper,
            bb_lower: lower,
            adx: adx_series(candles, 14),
        }
    }

    pub fn len(&self) -> usize {
        self.ema5.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ema5.is_empty()
    }

    /// The row at `index`, if every cell is available there.
    pub fn row(&self, index: usize) -> Option<IndicatorRow> {
        if index >= self.len() {
            return None;
        }
        Some(IndicatorRow {
            ema5: self.ema5[index],
            ema20: self.ema20[index],
            rsi: self.rsi[index]?,
            macd: self.macd[index],
            macd_signal: self.macd_signal[index],
            atr: self.atr[index]?,
            bb_mid: self.bb_mid[index]?,
            bb_std: self.bb_std[index]?,
            bb_upper: self.bb_upper[index]?,
            bb_lower: self.bb_lower[index]?,
            adx: self.adx[index],
        })
    }

    /// The most recent row, if fully available.
    pub fn latest(&self) -> Option<IndicatorRow> {
        self.row(self.len().checked_sub(1)?)
    }
}
