//! Console report rendering.
//!
//! Formats what the core produced — values, verdict, reasons, plan —
//! without recomputing any derived number.

use chrono::NaiveDate;
use pullscan_core::{EntryTactic, ScanConfig, ScanReport};
use std::fmt::Write;

/// Render the scan report as plain text.
pub fn render(
    display_name: &str,
    symbol: &str,
    as_of: NaiveDate,
    report: &ScanReport,
    config: &ScanConfig,
) -> String {
    let v = &report.decision.values;
    let mut out = String::new();

    let _ = writeln!(out, "=== {display_name} ({symbol}) — pullback entry scan ===");
    let _ = writeln!(out, "as of: {as_of}");
    let _ = writeln!(
        out,
        "close: {:.2}    low: {:.2}    volume: {}",
        v.close, v.low, v.volume
    );
    let _ = writeln!(
        out,
        "SMA{}: {:.2}    SMA{}: {:.2}    SMA{}: {:.2}",
        config.sma_short, v.sma_short, config.sma_mid, v.sma_mid, config.sma_long, v.sma_long
    );
    let _ = writeln!(
        out,
        "RSI{}: {:.2} (prior {:.2})",
        config.rsi_period, v.rsi, v.rsi_prev
    );
    let _ = writeln!(
        out,
        "MACD: {:.4}    signal: {:.4}    hist: {:.6}",
        v.macd, v.macd_signal, v.macd_hist
    );
    let _ = writeln!(
        out,
        "{}-day high: {:.2}    {}-day low: {:.2}    off high: {:.2}%",
        config.lookback_days, v.recent_high, config.lookback_days, v.recent_low, v.drop_from_high_pct
    );
    let _ = writeln!(
        out,
        "{}-day avg volume: {:.0}",
        config.volume_sma, v.volume_sma
    );
    let _ = writeln!(out, "--------------------------------------");
    let verdict = if report.decision.entry {
        "YES — qualifying pullback, consider scaling in"
    } else {
        "NO — conditions not met"
    };
    let _ = writeln!(out, "pullback entry: {verdict}");
    if report.decision.flags.volume_confirm_ok {
        let _ = writeln!(
            out,
            "volume confirmation: today's volume clears the {:.1}x bar",
            config.volume_confirm_ratio
        );
    }

    let _ = writeln!(out, "\nreasons:");
    for reason in &report.decision.reasons {
        let _ = writeln!(out, " - {reason}");
    }

    let _ = writeln!(out, "\nsuggested plan (reference only):");
    match report.plan.entry {
        EntryTactic::Zone { low, high } => {
            let _ = writeln!(out, " - accumulate inside {low:.2} ~ {high:.2}");
        }
        EntryTactic::Breakout { trigger } => {
            let _ = writeln!(out, " - or wait for a breakout above {trigger:.2}");
        }
    }
    let _ = writeln!(
        out,
        " - stop-loss: {:.2} ({:.1}% below the {}-day low)",
        report.plan.stop_loss,
        config.stop_loss_buffer * 100.0,
        config.lookback_days
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullscan_core::domain::PriceBar;
    use pullscan_core::scan;

    fn sample_report() -> (ScanReport, ScanConfig, NaiveDate) {
        let config = ScanConfig::default();
        let base_date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let bars: Vec<PriceBar> = (0..250)
            .map(|i| {
                let close = 100.0 + 0.3 * i as f64;
                PriceBar {
                    date: base_date + chrono::Duration::days(i as i64),
                    open: close - 0.2,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 10_000,
                }
            })
            .collect();
        let as_of = bars.last().unwrap().date;
        let report = scan(&bars, &config).unwrap();
        (report, config, as_of)
    }

    #[test]
    fn report_contains_all_sections() {
        let (report, config, as_of) = sample_report();
        let text = render("Hon Hai", "2317.TW", as_of, &report, &config);
        assert!(text.contains("Hon Hai (2317.TW)"));
        assert!(text.contains("SMA20"));
        assert!(text.contains("SMA200"));
        assert!(text.contains("RSI14"));
        assert!(text.contains("reasons:"));
        assert!(text.contains("stop-loss:"));
        // Monotone rise: no pullback, so the plan is a breakout trigger.
        assert!(text.contains("breakout above"));
        assert!(text.contains("pullback entry: NO"));
    }

    #[test]
    fn reason_lines_match_decision() {
        let (report, config, as_of) = sample_report();
        let text = render("X", "X", as_of, &report, &config);
        for reason in &report.decision.reasons {
            assert!(text.contains(reason.as_str()));
        }
    }
}
