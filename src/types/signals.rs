use serde::{Deserialize, Serialize};

/// Trading signal for the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    None,
}

impl Signal {
    /// Get display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::None => "NONE",
        }
    }

    /// Whether this signal can be held (BUY/SELL, not NONE).
    pub fn is_directional(&self) -> bool {
        !matches!(self, Signal::None)
    }
}

/// One recorded signal transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    /// Unix timestamp in milliseconds when the transition was observed.
    pub time: i64,
    pub signal: Signal,
}

/// Win/loss counters for scored transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerStats {
    pub win: u32,
    pub loss: u32,
    /// Accuracy percentage, always formatted with two decimals (e.g. "66.67%").
    pub accuracy: String,
}

/// A candle joined with its indicator row.
///
/// Indicator cells are null until their lookback window is satisfied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub ema5: Option<f64>,
    pub ema20: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub atr: Option<f64>,
    pub bb_mid: Option<f64>,
    pub bb_std: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub adx: Option<f64>,
}

/// Full signal evaluation response for one instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    pub asset: String,
    pub signal: Signal,
    /// Most recent transitions, newest first, at most ten entries.
    pub history: Vec<SignalEvent>,
    pub stats: TrackerStats,
    /// Last rows of the candle series joined with the indicator frame.
    pub chart: Vec<ChartRow>,
}
