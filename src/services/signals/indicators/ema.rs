//! Exponential Moving Average (EMA) series.

use super::exp_smooth;

/// EMA with smoothing weight alpha = 2 / (span + 1), seeded with the first
/// observed value. Defined for every index of the input.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    exp_smooth(values, 2.0 / (span as f64 + 1.0))
}
