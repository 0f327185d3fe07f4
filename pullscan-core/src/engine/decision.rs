//! Pullback decision rules.
//!
//! Five rules evaluated in fixed order against the latest bar, the prior
//! bar, and the trailing lookback window. Every rule emits exactly one
//! reason string whether it passes or fails, so the explanation is always
//! complete and stable. The engine is a pure function of its inputs: no
//! state survives between calls, and identical inputs always produce the
//! identical verdict.
//!
//! Verdict shape (by design): trend and the volume floor are mandatory
//! gates; the pullback trigger and momentum recovery each accept either
//! of two alternative confirmations.
//!
//!   entry = trend AND (pullback_sma OR pullback_pct)
//!                 AND (rsi OR macd) AND volume_entry

use super::enrich::EnrichedSeries;
use serde::{Deserialize, Serialize};

/// One boolean per evaluated rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFlags {
    pub trend_ok: bool,
    /// Pullback detected by the low touching the short SMA.
    pub pullback_by_threshold: bool,
    /// Pullback detected by the drop from the recent high.
    pub pullback_by_pct: bool,
    pub rsi_ok: bool,
    pub macd_ok: bool,
    pub volume_entry_ok: bool,
    /// Stricter volume check, reported for plan annotation only — never
    /// part of the entry verdict.
    pub volume_confirm_ok: bool,
}

/// Numeric values the rules were evaluated against, snapshotted so the
/// presentation layer never recomputes anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSnapshot {
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub volume: u64,
    pub sma_short: f64,
    pub sma_mid: f64,
    pub sma_long: f64,
    pub rsi: f64,
    pub rsi_prev: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_hist: f64,
    pub volume_sma: f64,
    pub recent_high: f64,
    pub recent_low: f64,
    /// Drop from the recent high to today's low, in percent.
    pub drop_from_high_pct: f64,
}

/// Verdict, itemized reasons (fixed rule order), flags, and value snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub entry: bool,
    pub reasons: Vec<String>,
    pub flags: RuleFlags,
    pub values: ValueSnapshot,
}

/// Evaluate the pullback rules at the latest bar of an enriched series.
pub fn decide(series: &EnrichedSeries) -> DecisionResult {
    let config = series.config();
    let bars = series.bars();
    let last = bars.len() - 1;
    let prev = last - 1;

    let latest = &bars[last];
    let window = series.lookback_window();

    let sma_short = series.sma_short[last];
    let sma_mid = series.sma_mid[last];
    let sma_long = series.sma_long[last];
    let rsi = series.rsi[last];
    let rsi_prev = series.rsi[prev];
    let macd = series.macd.macd[last];
    let macd_signal = series.macd.signal[last];
    let macd_hist = series.macd.hist[last];
    let macd_hist_prev = series.macd.hist[prev];
    let vol_sma = series.volume_sma[last];

    let recent_high = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let recent_low = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);

    // Drop depth uses the intraday low, not the close (preserved from the
    // source policy; see DESIGN.md).
    let drop_from_high = if recent_high > 0.0 {
        (recent_high - latest.low) / recent_high
    } else {
        0.0
    };

    let mut flags = RuleFlags::default();
    let mut reasons = Vec::with_capacity(5);

    // 1) Trend: SMA_mid > SMA_long and close > SMA_mid. Warm-up NaN fails
    //    both comparisons, which is the required "undefined → false".
    flags.trend_ok = sma_mid > sma_long && latest.close > sma_mid;
    if flags.trend_ok {
        reasons.push(format!(
            "uptrend intact: SMA{} {:.2} > SMA{} {:.2} and close {:.2} > SMA{}",
            config.sma_mid, sma_mid, config.sma_long, sma_long, latest.close, config.sma_mid
        ));
    } else {
        reasons.push(format!(
            "no clean uptrend: SMA{} <= SMA{} or close <= SMA{}",
            config.sma_mid, config.sma_long, config.sma_mid
        ));
    }

    // 2) Pullback: low touched the short SMA, or the drop from the recent
    //    high reached the threshold. Either sub-condition is sufficient.
    flags.pullback_by_threshold = !sma_short.is_nan() && latest.low <= sma_short;
    flags.pullback_by_pct = drop_from_high >= config.pullback_pct;
    if flags.pullback_by_threshold {
        reasons.push(format!(
            "pullback: low {:.2} touched SMA{} {:.2}",
            latest.low, config.sma_short, sma_short
        ));
    } else if flags.pullback_by_pct {
        reasons.push(format!(
            "pullback: {:.2}% below the {}-day high (threshold {:.1}%)",
            drop_from_high * 100.0,
            config.lookback_days,
            config.pullback_pct * 100.0
        ));
    } else {
        reasons.push(format!(
            "no meaningful pullback: low above SMA{} and only {:.2}% off the {}-day high",
            config.sma_short,
            drop_from_high * 100.0,
            config.lookback_days
        ));
    }

    // 3) RSI: gentle recovery inside the 30-50 band, or a fresh upward
    //    crossing of the 30 or 40 threshold.
    flags.rsi_ok = ((30.0..=50.0).contains(&rsi) && rsi > rsi_prev)
        || (rsi_prev < 30.0 && rsi >= 30.0)
        || (rsi_prev < 40.0 && rsi >= 40.0);
    if flags.rsi_ok {
        reasons.push(format!(
            "RSI recovering: {:.2} up from {:.2}",
            rsi, rsi_prev
        ));
    } else {
        reasons.push(format!(
            "RSI not recovering: {:.2} (prior {:.2})",
            rsi, rsi_prev
        ));
    }

    // 4) MACD: histogram rising above zero, or MACD above its signal line.
    flags.macd_ok = (macd_hist > macd_hist_prev && macd_hist > 0.0) || macd > macd_signal;
    if flags.macd_ok {
        reasons.push(format!(
            "MACD momentum returning: hist {:.4} (prior {:.4}), macd {:.4} vs signal {:.4}",
            macd_hist, macd_hist_prev, macd, macd_signal
        ));
    } else {
        reasons.push(format!(
            "MACD momentum still weak: hist {:.4}, macd {:.4} vs signal {:.4}",
            macd_hist, macd, macd_signal
        ));
    }

    // 5) Volume floor: today's volume must not have dried up completely. A
    //    pullback bottom may trade light, so the entry ratio is permissive.
    flags.volume_entry_ok =
        !vol_sma.is_nan() && latest.volume as f64 >= config.volume_entry_ratio * vol_sma;
    flags.volume_confirm_ok =
        !vol_sma.is_nan() && latest.volume as f64 >= config.volume_confirm_ratio * vol_sma;
    if flags.volume_entry_ok {
        reasons.push(format!(
            "volume acceptable: {} >= {:.1} x {}-day average ({:.0})",
            latest.volume, config.volume_entry_ratio, config.volume_sma, vol_sma
        ));
    } else {
        reasons.push(format!(
            "volume too thin: {} < {:.1} x {}-day average ({:.0})",
            latest.volume, config.volume_entry_ratio, config.volume_sma, vol_sma
        ));
    }

    let entry = flags.trend_ok
        && (flags.pullback_by_threshold || flags.pullback_by_pct)
        && (flags.rsi_ok || flags.macd_ok)
        && flags.volume_entry_ok;

    DecisionResult {
        entry,
        reasons,
        flags,
        values: ValueSnapshot {
            close: latest.close,
            low: latest.low,
            high: latest.high,
            volume: latest.volume,
            sma_short,
            sma_mid,
            sma_long,
            rsi,
            rsi_prev,
            macd,
            macd_signal,
            macd_hist,
            volume_sma: vol_sma,
            recent_high,
            recent_low,
            drop_from_high_pct: drop_from_high * 100.0,
        },
    }
}
