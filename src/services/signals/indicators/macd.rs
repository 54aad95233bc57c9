//! Moving Average Convergence Divergence (MACD) series.

use super::ema_series;

/// MACD line and its signal line, both defined from the first sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// MACD = EMA(close, 12) - EMA(close, 26); signal = EMA(MACD, 9).
pub fn macd_series(closes: &[f64]) -> MacdSeries {
    let ema12 = ema_series(closes, 12);
    let ema26 = ema_series(closes, 26);
    let macd: Vec<f64> = ema12
        .iter()
        .zip(&ema26)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal = ema_series(&macd, 9);
    MacdSeries { macd, signal }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macd_lengths_match_input() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64).sin()).collect();
        let macd = macd_series(&closes);
        assert_eq!(macd.macd.len(), 60);
        assert_eq!(macd.signal.len(), 60);
    }

    #[test]
    fn test_macd_constant_series_is_zero() {
        let closes = vec![42.0; 40];
        let macd = macd_series(&closes);
        assert!(macd.macd.iter().all(|v| v.abs() < 1e-12));
        assert!(macd.signal.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.5).collect();
        let macd = macd_series(&closes);
        assert!(*macd.macd.last().unwrap() > 0.0);
    }

    #[test]
    fn test_macd_negative_in_downtrend() {
        let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64 * 0.5).collect();
        let macd = macd_series(&closes);
        assert!(*macd.macd.last().unwrap() < 0.0);
    }

    #[test]
    fn test_macd_empty_input() {
        let macd = macd_series(&[]);
        assert!(macd.macd.is_empty());
        assert!(macd.signal.is_empty());
    }
}
