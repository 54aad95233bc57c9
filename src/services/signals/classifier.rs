//! Threshold rules turning the latest indicator row into a signal.

use super::indicators::IndicatorRow;
use crate::types::Signal;

/// Minimum trend strength before a directional call is allowed.
const ADX_FLOOR: f64 = 20.0;

/// Classify the latest bar.
///
/// Every condition must hold; anything mixed is NONE:
/// - BUY: EMA5 above EMA20, RSI above 50, MACD above its signal line,
///   positive ATR, close above the Bollinger midline, ADX above 20.
/// - SELL: all of those inequalities reversed (ATR still positive).
pub fn classify(row: &IndicatorRow, close: f64) -> Signal {
    if row.ema5 > row.ema20
        && row.rsi > 50.0
        && row.macd > row.macd_signal
        && row.atr > 0.0
        && close > row.bb_mid
        && row.adx > ADX_FLOOR
    {
        Signal::Buy
    } else if row.ema5 < row.ema20
        && row.rsi < 50.0
        && row.macd < row.macd_signal
        && row.atr > 0.0
        && close < row.bb_mid
        && row.adx > ADX_FLOOR
    {
        Signal::Sell
    } else {
        Signal::None
    }
}
