//! The evaluation pipeline: enrich → decide → plan.
//!
//! Each stage is a pure function of its inputs. `scan` wires the three
//! stages together for the common single-call case.

mod decision;
mod enrich;
mod plan;

pub use decision::{decide, DecisionResult, RuleFlags, ValueSnapshot};
pub use enrich::EnrichedSeries;
pub use plan::{build_plan, EntryTactic, TradePlan};

use crate::config::ScanConfig;
use crate::domain::PriceBar;
use crate::error::ScanError;
use serde::{Deserialize, Serialize};

/// The combined output of one evaluation: verdict plus suggested plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub decision: DecisionResult,
    pub plan: TradePlan,
}

/// Run the full pipeline over an ascending daily series.
///
/// Validates the configuration, enriches the series with indicators,
/// evaluates the pullback rules at the latest bar, and derives a trade
/// plan. Fails fast with `ScanError::InsufficientHistory` when the series
/// is too short for the configured windows.
pub fn scan(bars: &[PriceBar], config: &ScanConfig) -> Result<ScanReport, ScanError> {
    config.validate()?;
    let enriched = EnrichedSeries::compute(bars, config)?;
    let decision = decide(&enriched);
    let plan = build_plan(&decision, config);
    Ok(ScanReport { decision, plan })
}
