//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1], with
//! alpha = 2 / (span + 1). Seeded with the first observation itself, so the
//! series is defined from bar 0 and is a pure prefix function — growing the
//! history never changes earlier values.

use crate::domain::PriceBar;

/// EMA of close with the given span. Defined for every bar.
pub fn ema(bars: &[PriceBar], span: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    ema_of_series(&closes, span)
}

/// EMA over a raw f64 slice. Used for the MACD signal line, which smooths
/// the MACD series rather than prices.
pub fn ema_of_series(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");
    let n = values.len();
    let mut result = Vec::with_capacity(n);

    if n == 0 {
        return result;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut prev = values[0];
    result.push(prev);

    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        result.push(prev);
    }

    result
}
