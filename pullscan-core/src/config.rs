//! Scan configuration — every tunable in one immutable record.
//!
//! The three historical script variants of this scanner encoded the same
//! decision policy with different hardcoded constants. They survive here
//! as named presets over a single `ScanConfig`; no module-level constants,
//! no process-wide state. The config is passed explicitly into every
//! engine call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one scan: indicator windows, rule thresholds, plan buffers.
///
/// TOML-deserializable; missing fields fall back to the `default` preset
/// values, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Short SMA window (pullback reference).
    pub sma_short: usize,
    /// Mid SMA window (trend leg).
    pub sma_mid: usize,
    /// Long SMA window (trend leg).
    pub sma_long: usize,
    /// Wilder RSI period.
    pub rsi_period: usize,
    /// MACD fast EMA span.
    pub macd_fast: usize,
    /// MACD slow EMA span.
    pub macd_slow: usize,
    /// MACD signal EMA span.
    pub macd_signal: usize,
    /// Volume SMA window.
    pub volume_sma: usize,
    /// Trailing window for recent high/low (bars, latest included).
    pub lookback_days: usize,
    /// Drop from recent high that counts as a pullback (fraction, e.g. 0.07).
    pub pullback_pct: f64,
    /// Entry volume floor: today's volume >= ratio * volume SMA.
    pub volume_entry_ratio: f64,
    /// Stricter confirmation ratio, reported but never gating entry.
    pub volume_confirm_ratio: f64,
    /// Stop-loss distance below the recent swing low (fraction).
    pub stop_loss_buffer: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanPreset::Default.to_config()
    }
}

impl ScanConfig {
    /// Minimum series length the engine accepts: the largest configured
    /// window plus a fixed safety margin of 5 bars.
    pub fn min_history(&self) -> usize {
        let largest = [
            self.sma_short,
            self.sma_mid,
            self.sma_long,
            self.rsi_period,
            self.macd_fast,
            self.macd_slow,
            self.macd_signal,
            self.volume_sma,
            self.lookback_days,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);
        largest + 5
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot evaluate meaningfully.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("sma_short", self.sma_short),
            ("sma_mid", self.sma_mid),
            ("sma_long", self.sma_long),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("volume_sma", self.volume_sma),
            ("lookback_days", self.lookback_days),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ConfigError::ZeroWindow { name });
            }
        }
        if self.macd_fast >= self.macd_slow {
            return Err(ConfigError::MacdSpans {
                fast: self.macd_fast,
                slow: self.macd_slow,
            });
        }
        if !(self.pullback_pct > 0.0 && self.pullback_pct < 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "pullback_pct",
                value: self.pullback_pct,
            });
        }
        if self.volume_entry_ratio <= 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "volume_entry_ratio",
                value: self.volume_entry_ratio,
            });
        }
        if self.volume_confirm_ratio <= 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "volume_confirm_ratio",
                value: self.volume_confirm_ratio,
            });
        }
        if !(self.stop_loss_buffer >= 0.0 && self.stop_loss_buffer < 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "stop_loss_buffer",
                value: self.stop_loss_buffer,
            });
        }
        Ok(())
    }
}

/// Named presets — the deployed parameter combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPreset {
    /// The canonical pullback-in-uptrend parameters (200-day trend leg).
    Default,
    /// Shorter trend pair with a strict volume gate.
    Balanced,
    /// Widened pullback band and relaxed volume floor for thin names.
    Loose,
}

impl ScanPreset {
    pub fn all() -> [ScanPreset; 3] {
        [Self::Default, Self::Balanced, Self::Loose]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Balanced => "balanced",
            Self::Loose => "loose",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "balanced" => Some(Self::Balanced),
            "loose" => Some(Self::Loose),
            _ => None,
        }
    }

    /// Materialize the preset as a full configuration record.
    pub fn to_config(self) -> ScanConfig {
        match self {
            Self::Default => ScanConfig {
                sma_short: 20,
                sma_mid: 50,
                sma_long: 200,
                rsi_period: 14,
                macd_fast: 12,
                macd_slow: 26,
                macd_signal: 9,
                volume_sma: 20,
                lookback_days: 10,
                pullback_pct: 0.07,
                volume_entry_ratio: 0.8,
                volume_confirm_ratio: 1.2,
                stop_loss_buffer: 0.015,
            },
            Self::Balanced => ScanConfig {
                sma_mid: 20,
                sma_long: 50,
                volume_entry_ratio: 1.2,
                ..Self::Default.to_config()
            },
            Self::Loose => ScanConfig {
                pullback_pct: 0.05,
                volume_entry_ratio: 0.7,
                ..Self::Default.to_config()
            },
        }
    }
}

/// Structured errors for invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("window '{name}' must be >= 1")]
    ZeroWindow { name: &'static str },

    #[error("macd_fast ({fast}) must be smaller than macd_slow ({slow})")]
    MacdSpans { fast: usize, slow: usize },

    #[error("'{name}' is out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_values() {
        let config = ScanConfig::default();
        assert_eq!(config.sma_short, 20);
        assert_eq!(config.sma_mid, 50);
        assert_eq!(config.sma_long, 200);
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.lookback_days, 10);
        assert!((config.pullback_pct - 0.07).abs() < 1e-12);
        assert!((config.volume_entry_ratio - 0.8).abs() < 1e-12);
        assert!((config.stop_loss_buffer - 0.015).abs() < 1e-12);
    }

    #[test]
    fn min_history_is_largest_window_plus_margin() {
        let config = ScanConfig::default();
        assert_eq!(config.min_history(), 205);

        let balanced = ScanPreset::Balanced.to_config();
        assert_eq!(balanced.min_history(), 55);
    }

    #[test]
    fn presets_validate() {
        for preset in ScanPreset::all() {
            preset.to_config().validate().unwrap();
        }
    }

    #[test]
    fn preset_roundtrip_by_name() {
        for preset in ScanPreset::all() {
            assert_eq!(ScanPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(ScanPreset::from_name("bogus"), None);
    }

    #[test]
    fn toml_partial_override() {
        let config = ScanConfig::from_toml("sma_long = 100\npullback_pct = 0.05\n").unwrap();
        assert_eq!(config.sma_long, 100);
        assert!((config.pullback_pct - 0.05).abs() < 1e-12);
        // Untouched fields keep the default preset values.
        assert_eq!(config.sma_short, 20);
    }

    #[test]
    fn toml_rejects_unknown_field() {
        assert!(ScanConfig::from_toml("sma_longest = 9").is_err());
    }

    #[test]
    fn validate_rejects_zero_window() {
        let mut config = ScanConfig::default();
        config.rsi_period = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroWindow { name: "rsi_period" })
        ));
    }

    #[test]
    fn validate_rejects_inverted_macd_spans() {
        let mut config = ScanConfig::default();
        config.macd_fast = 26;
        config.macd_slow = 12;
        assert!(matches!(config.validate(), Err(ConfigError::MacdSpans { .. })));
    }

    #[test]
    fn validate_rejects_bad_ratio() {
        let mut config = ScanConfig::default();
        config.volume_entry_ratio = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { .. })));
    }
}
