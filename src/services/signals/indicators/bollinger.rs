//! Bollinger Bands series.

use super::rolling_mean;

/// Middle band, deviation and the two envelopes, window-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub mid: Vec<Option<f64>>,
    pub std: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Bollinger bands over a rolling window of closes.
///
/// The middle band is the rolling mean; deviation is the rolling sample
/// standard deviation (divisor window - 1); the envelopes sit at
/// mid +/- k * std. Requires window >= 2.
pub fn bollinger_series(closes: &[f64], window: usize, k: f64) -> BollingerSeries {
    let n = closes.len();
    let mid = rolling_mean(closes, window);
    let mut std = vec![None; n];
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    if window >= 2 && n >= window {
        for t in window - 1..n {
            let mean = mid[t].expect("mid defined once window is full");
            let variance: f64 = closes[t + 1 - window..=t]
                .iter()
                .map(|c| (c - mean).powi(2))
                .sum::<f64>()
                / (window - 1) as f64;
            let dev = variance.sqrt();
            std[t] = Some(dev);
            upper[t] = Some(mean + k * dev);
            lower[t] = Some(mean - k * dev);
        }
    }

    BollingerSeries {
        mid,
        std,
        upper,
        lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_warmup() {
        let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let bb = bollinger_series(&closes, 20, 2.0);
        assert!(bb.mid[..19].iter().all(|v| v.is_none()));
        assert!(bb.mid[19].is_some());
        assert!(bb.upper[19].is_some());
        assert!(bb.lower[19].is_some());
    }

    #[test]
    fn test_bollinger_constant_series_collapses() {
        let closes = vec![7.0; 30];
        let bb = bollinger_series(&closes, 20, 2.0);
        assert_eq!(bb.mid.last().unwrap().unwrap(), 7.0);
        assert_eq!(bb.std.last().unwrap().unwrap(), 0.0);
        assert_eq!(bb.upper.last().unwrap().unwrap(), 7.0);
        assert_eq!(bb.lower.last().unwrap().unwrap(), 7.0);
    }

    #[test]
    fn test_bollinger_known_window() {
        // Closes 1..=20: mean 10.5, sample variance 35.
        let closes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let bb = bollinger_series(&closes, 20, 2.0);
        let mid = bb.mid[19].unwrap();
        let std = bb.std[19].unwrap();
        assert!((mid - 10.5).abs() < 1e-12);
        assert!((std - 35.0_f64.sqrt()).abs() < 1e-12);
        assert!((bb.upper[19].unwrap() - (10.5 + 2.0 * std)).abs() < 1e-12);
        assert!((bb.lower[19].unwrap() - (10.5 - 2.0 * std)).abs() < 1e-12);
    }

    #[test]
    fn test_bollinger_bands_bracket_mid() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.5).sin()).collect();
        let bb = bollinger_series(&closes, 20, 2.0);
        for t in 19..closes.len() {
            let mid = bb.mid[t].unwrap();
            assert!(bb.upper[t].unwrap() >= mid);
            assert!(bb.lower[t].unwrap() <= mid);
        }
    }

    #[test]
    fn test_bollinger_insufficient_data() {
        let closes = vec![1.0; 10];
        let bb = bollinger_series(&closes, 20, 2.0);
        assert!(bb.mid.iter().all(|v| v.is_none()));
        assert!(bb.std.iter().all(|v| v.is_none()));
    }
}
