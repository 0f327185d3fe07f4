//! Trade plan derivation.
//!
//! Exactly one entry tactic per evaluation, chosen by which pullback
//! sub-condition fired:
//! - SMA pullback → a conservative zone anchored to the short SMA, floored
//!   by the recent swing low so the suggestion never sits below support.
//! - Percentage pullback → the recent low up to the midpoint of the
//!   lookback range.
//! - No pullback → a breakout trigger just above today's high.
//!
//! The stop always goes below the lookback window's swing low, not below
//! any single bar's low, so ordinary single-day noise does not trigger it.

use super::decision::DecisionResult;
use crate::config::ScanConfig;
use serde::{Deserialize, Serialize};

/// How to enter: a buy zone or a breakout trigger — never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tactic", rename_all = "snake_case")]
pub enum EntryTactic {
    /// Accumulate inside a price band.
    Zone { low: f64, high: f64 },
    /// Wait for price to clear the trigger before buying.
    Breakout { trigger: f64 },
}

/// Suggested entry tactic plus stop-loss level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub entry: EntryTactic,
    pub stop_loss: f64,
}

/// Derive the plan from a decision's flags and value snapshot.
pub fn build_plan(decision: &DecisionResult, config: &ScanConfig) -> TradePlan {
    let v = &decision.values;

    let entry = if decision.flags.pullback_by_threshold {
        EntryTactic::Zone {
            low: v.recent_low.max(v.sma_short * 0.98),
            high: v.close.max(v.sma_short),
        }
    } else if decision.flags.pullback_by_pct {
        EntryTactic::Zone {
            low: v.recent_low,
            high: (v.recent_high + v.recent_low) / 2.0,
        }
    } else {
        EntryTactic::Breakout {
            trigger: v.high * 1.002,
        }
    };

    TradePlan {
        entry,
        stop_loss: v.recent_low * (1.0 - config.stop_loss_buffer),
    }
}
