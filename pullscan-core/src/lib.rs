//! PullScan Core — pullback-entry evaluation for a single equity.
//!
//! This crate is the pure heart of the scanner:
//! - Domain types (daily OHLCV bars)
//! - Indicator computation (SMA, EMA, Wilder RSI, MACD, volume SMA)
//! - Rule-based pullback decision with itemized reasons
//! - Trade plan derivation (entry zone / breakout trigger, stop-loss)
//! - Configuration record with named presets
//!
//! Everything here is synchronous, deterministic, and free of I/O.
//! Fetching bars and rendering reports live in `pullscan-cli`.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;

pub use config::{ScanConfig, ScanPreset};
pub use engine::{scan, DecisionResult, EnrichedSeries, EntryTactic, ScanReport, TradePlan};
pub use error::ScanError;
