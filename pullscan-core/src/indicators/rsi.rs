//! Relative Strength Index (RSI) with Wilder smoothing.
//!
//! Gains and losses are smoothed independently with alpha = 1/period
//! (Wilder's smoothing, not a standard EMA span), seeded with the first
//! delta. RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//!
//! Edge cases, resolved here so downstream never sees NaN:
//! - bar 0 has no delta yet → RSI = 50 (neutral seed)
//! - avg_loss == 0 with gains present → RSI = 100 (maximal strength)
//! - no movement at all (both averages zero) → RSI = 50

use crate::domain::PriceBar;

/// Wilder RSI over close-to-close deltas. Always in [0, 100], never NaN.
pub fn wilder_rsi(bars: &[PriceBar], period: usize) -> Vec<f64> {
    assert!(period >= 1, "RSI period must be >= 1");
    let n = bars.len();
    let mut result = Vec::with_capacity(n);

    if n == 0 {
        return result;
    }

    result.push(50.0);

    let alpha = 1.0 / period as f64;
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 1..n {
        let delta = bars[i].close - bars[i - 1].close;
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        if i == 1 {
            // First delta seeds both smoothed averages.
            avg_gain = gain;
            avg_loss = loss;
        } else {
            avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
            avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
        }

        result.push(rsi_value(avg_gain, avg_loss));
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // no movement
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
