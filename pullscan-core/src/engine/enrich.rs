//! Series enrichment — the indicator engine.
//!
//! Computes every configured indicator once, aligned 1:1 with the bars.
//! The length precondition is checked up front: a series shorter than the
//! largest configured window plus the 5-bar safety margin is rejected
//! before any indicator is computed, not discovered lazily.

use crate::config::ScanConfig;
use crate::domain::PriceBar;
use crate::error::ScanError;
use crate::indicators::{macd, sma, volume_sma, wilder_rsi, MacdSeries};

/// An OHLCV series plus its derived indicator series.
///
/// Every indicator value at bar t is a function of the series prefix up to
/// and including t; recomputing over a longer history never changes values
/// at earlier bars. SMA-family series are NaN during warm-up; RSI and MACD
/// are defined for every bar by their seeding policies.
#[derive(Debug, Clone)]
pub struct EnrichedSeries {
    bars: Vec<PriceBar>,
    config: ScanConfig,
    pub(crate) sma_short: Vec<f64>,
    pub(crate) sma_mid: Vec<f64>,
    pub(crate) sma_long: Vec<f64>,
    pub(crate) rsi: Vec<f64>,
    pub(crate) macd: MacdSeries,
    pub(crate) volume_sma: Vec<f64>,
}

impl EnrichedSeries {
    /// Enrich an ascending daily series with the configured indicators.
    pub fn compute(bars: &[PriceBar], config: &ScanConfig) -> Result<Self, ScanError> {
        let required = config.min_history();
        if bars.len() < required {
            return Err(ScanError::InsufficientHistory {
                required,
                got: bars.len(),
            });
        }

        Ok(Self {
            bars: bars.to_vec(),
            config: config.clone(),
            sma_short: sma(bars, config.sma_short),
            sma_mid: sma(bars, config.sma_mid),
            sma_long: sma(bars, config.sma_long),
            rsi: wilder_rsi(bars, config.rsi_period),
            macd: macd(bars, config.macd_fast, config.macd_slow, config.macd_signal),
            volume_sma: volume_sma(bars, config.volume_sma),
        })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The trailing lookback window, latest bar included.
    pub(crate) fn lookback_window(&self) -> &[PriceBar] {
        let start = self.bars.len().saturating_sub(self.config.lookback_days);
        &self.bars[start..]
    }
}
