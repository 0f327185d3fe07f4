//! Simple Moving Average (SMA) of close prices.
//!
//! Rolling mean over a trailing window; the first period-1 values are NaN.

use crate::domain::PriceBar;

/// SMA of close over `period` bars. NaN until `period` bars exist.
pub fn sma(bars: &[PriceBar], period: usize) -> Vec<f64> {
    assert!(period >= 1, "SMA period must be >= 1");
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    rolling_mean(&closes, period)
}

/// Rolling arithmetic mean over a raw series. Shared by close and volume SMAs.
pub(crate) fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period {
        return result;
    }

    let mut sum: f64 = values[..period].iter().sum();
    result[period - 1] = sum / period as f64;

    for i in period..n {
        sum = sum - values[i - period] + values[i];
        result[i] = sum / period as f64;
    }

    result
}
