//! Indicator computation.
//!
//! Indicators are pure functions: a chronologically ascending bar slice in,
//! an aligned `Vec<f64>` out (one value per bar). Rolling indicators hold
//! `f64::NAN` during their warm-up; exponential indicators are seeded so
//! they are defined from the first bar.
//!
//! # Look-ahead contamination guard
//! No indicator value at bar t may depend on data from bar t+1 or later.
//! Recomputing over a longer history must never change earlier values.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod volume;

pub use ema::{ema, ema_of_series};
pub use macd::{macd, MacdSeries};
pub use rsi::wilder_rsi;
pub use sma::sma;
pub use volume::volume_sma;

#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-9;

#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {expected}, got {actual} (epsilon {epsilon})"
    );
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub(crate) fn make_bars(closes: &[f64]) -> Vec<crate::domain::PriceBar> {
    use crate::domain::PriceBar;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            }
        })
        .collect()
}
