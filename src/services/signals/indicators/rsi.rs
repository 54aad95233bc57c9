//! Relative Strength Index (RSI) series.

/// RSI over simple rolling means of gains and losses.
///
/// Deltas exist from index 1, so the first available cell is at
/// `period` (a full window of `period` deltas). Edge cases are pinned
/// instead of dividing by zero: all-gain windows read 100, windows with no
/// movement at all read 50.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for t in 1..n {
        let delta = closes[t] - closes[t - 1];
        gains[t] = delta.max(0.0);
        losses[t] = (-delta).max(0.0);
    }

    let mut gain_sum: f64 = gains[1..=period].iter().sum();
    let mut loss_sum: f64 = losses[1..=period].iter().sum();
    out[period] = Some(rsi_from_sums(gain_sum, loss_sum, period));

    for t in period + 1..n {
        gain_sum += gains[t] - gains[t - period];
        loss_sum += losses[t] - losses[t - period];
        out[t] = Some(rsi_from_sums(gain_sum, loss_sum, period));
    }

    out
}

fn rsi_from_sums(gain_sum: f64, loss_sum: f64, period: usize) -> f64 {
    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            // No movement in the window at all.
            return 50.0;
        }
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
