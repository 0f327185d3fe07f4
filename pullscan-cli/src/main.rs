//! PullScan CLI — fetch daily bars and run the pullback-entry scan.
//!
//! Commands:
//! - `scan` — evaluate one ticker (Yahoo Finance fetch or CSV import)
//! - `presets` — list named parameter presets

mod data;
mod report;
mod resolver;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pullscan_core::{scan, ScanConfig, ScanPreset};
use std::path::PathBuf;

use data::{load_csv, YahooProvider};
use resolver::{LocalTable, ProviderName, ResolverChain};

#[derive(Parser)]
#[command(name = "pullscan", about = "Pullback-in-uptrend entry scanner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a ticker against the pullback entry rules.
    Scan {
        /// Ticker symbol (e.g. 2317.TW, AAPL).
        symbol: String,

        /// Calendar days of history to fetch.
        #[arg(long, default_value_t = 400)]
        days: u32,

        /// Named preset: default, balanced, loose.
        #[arg(long, default_value = "default")]
        preset: String,

        /// TOML config file overriding the preset entirely.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read bars from a CSV file instead of the network.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Local ticker → company-name TOML table.
        #[arg(long)]
        names: Option<PathBuf>,

        /// Emit the raw report as JSON instead of the console view.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the named presets and their parameters.
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            symbol,
            days,
            preset,
            config,
            csv,
            names,
            json,
        } => run_scan(&symbol, days, &preset, config, csv, names, json),
        Commands::Presets => {
            list_presets();
            Ok(())
        }
    }
}

fn run_scan(
    symbol: &str,
    days: u32,
    preset: &str,
    config_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
    names_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            ScanConfig::from_toml(&text)?
        }
        None => match ScanPreset::from_name(preset) {
            Some(p) => p.to_config(),
            None => bail!("unknown preset '{preset}' (try: default, balanced, loose)"),
        },
    };

    let (bars, provider_name) = match csv_path {
        Some(path) => {
            let bars =
                load_csv(&path).with_context(|| format!("cannot import {}", path.display()))?;
            (bars, None)
        }
        None => {
            let fetched = YahooProvider::new()
                .fetch(symbol, days)
                .with_context(|| format!("fetch failed for {symbol}"))?;
            (fetched.bars, fetched.company_name)
        }
    };

    let report = scan(&bars, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let local = match names_path {
        Some(path) => Some(
            LocalTable::from_path(&path)
                .with_context(|| format!("cannot read name table {}", path.display()))?,
        ),
        None => None,
    };
    let chain = ResolverChain::standard(local, ProviderName::new(symbol, provider_name));
    let display_name = chain.resolve(symbol).unwrap_or_else(|| symbol.to_string());

    let as_of = bars.last().expect("scan succeeded on non-empty series").date;
    print!("{}", report::render(&display_name, symbol, as_of, &report, &config));
    Ok(())
}

fn list_presets() {
    for preset in ScanPreset::all() {
        let c = preset.to_config();
        println!(
            "{:<10} sma {}/{}/{}  rsi {}  macd {}/{}/{}  vol-sma {}  lookback {}d  \
             pullback {:.0}%  vol-entry {:.1}x  vol-confirm {:.1}x  stop {:.1}%",
            preset.name(),
            c.sma_short,
            c.sma_mid,
            c.sma_long,
            c.rsi_period,
            c.macd_fast,
            c.macd_slow,
            c.macd_signal,
            c.volume_sma,
            c.lookback_days,
            c.pullback_pct * 100.0,
            c.volume_entry_ratio,
            c.volume_confirm_ratio,
            c.stop_loss_buffer * 100.0,
        );
    }
}
