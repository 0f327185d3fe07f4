//! Moving Average Convergence/Divergence (MACD).
//!
//! MACD = EMA(fast) - EMA(slow); signal = EMA(signal span) of the MACD
//! series itself; hist = MACD - signal. All three are defined from bar 0
//! because the underlying EMAs are seeded with their first observation.

use super::ema::{ema, ema_of_series};
use crate::domain::PriceBar;

/// The three MACD series, aligned 1:1 with the input bars.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub hist: Vec<f64>,
}

/// Compute MACD with the given fast/slow/signal spans.
pub fn macd(bars: &[PriceBar], fast: usize, slow: usize, signal_span: usize) -> MacdSeries {
    assert!(fast < slow, "MACD fast span must be smaller than slow span");

    let ema_fast = ema(bars, fast);
    let ema_slow = ema(bars, slow);

    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();

    let signal = ema_of_series(&macd, signal_span);

    let hist: Vec<f64> = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries { macd, signal, hist }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn hist_is_macd_minus_signal_everywhere() {
        let bars = make_bars(&[
            10.0, 10.5, 11.0, 10.8, 11.2, 11.5, 11.1, 11.8, 12.0, 11.7, 12.3, 12.5,
        ]);
        let m = macd(&bars, 3, 6, 4);
        assert_eq!(m.macd.len(), bars.len());
        assert_eq!(m.signal.len(), bars.len());
        assert_eq!(m.hist.len(), bars.len());
        for i in 0..bars.len() {
            assert_approx(m.hist[i], m.macd[i] - m.signal[i], DEFAULT_EPSILON);
        }
    }

    #[test]
    fn macd_zero_at_first_bar() {
        // Both EMAs seed with the first close, so MACD[0] = 0 and so is hist.
        let bars = make_bars(&[42.0, 43.0, 41.0]);
        let m = macd(&bars, 12, 26, 9);
        assert_approx(m.macd[0], 0.0, DEFAULT_EPSILON);
        assert_approx(m.signal[0], 0.0, DEFAULT_EPSILON);
        assert_approx(m.hist[0], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn macd_positive_in_sustained_rally() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let m = macd(&bars, 12, 26, 9);
        // Fast EMA tracks a rising price more closely than the slow EMA.
        let last = *m.macd.last().unwrap();
        assert!(last > 0.0, "expected positive MACD in rally, got {last}");
    }

    #[test]
    #[should_panic(expected = "MACD fast span must be smaller than slow span")]
    fn rejects_fast_not_below_slow() {
        let bars = make_bars(&[1.0, 2.0]);
        macd(&bars, 26, 12, 9);
    }
}
