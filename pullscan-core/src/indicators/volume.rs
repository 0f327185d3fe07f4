//! Volume SMA — rolling mean of daily volume.
//!
//! Same warm-up semantics as the close SMA: NaN until `period` bars exist.

use super::sma::rolling_mean;
use crate::domain::PriceBar;

/// SMA of volume over `period` bars.
pub fn volume_sma(bars: &[PriceBar], period: usize) -> Vec<f64> {
    assert!(period >= 1, "volume SMA period must be >= 1");
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume as f64).collect();
    rolling_mean(&volumes, period)
}
