//! Yahoo Finance data provider.
//!
//! Fetches daily OHLCV bars from Yahoo's v8 chart API with a short retry
//! loop. Yahoo has no official API and is subject to unannounced format
//! changes; the CSV import path is the fallback when it is unavailable.

use super::DataError;
use pullscan_core::domain::PriceBar;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    long_name: Option<String>,
    short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

/// Parsed fetch result: the bars plus the company name Yahoo reported.
#[derive(Debug)]
pub struct FetchedSeries {
    pub bars: Vec<PriceBar>,
    pub company_name: Option<String>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    max_retries: u32,
    base_delay: Duration,
}

impl YahooProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }

    /// Build the chart API URL for a trailing range of calendar days.
    fn chart_url(symbol: &str, days: u32) -> String {
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?range={days}d&interval=1d"
        )
    }

    /// Fetch the last `days` calendar days of daily bars for `symbol`.
    pub fn fetch(&self, symbol: &str, days: u32) -> Result<FetchedSeries, DataError> {
        let url = Self::chart_url(symbol, days);
        let mut last_err = DataError::NetworkUnreachable("no attempt made".into());

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                std::thread::sleep(self.base_delay * 2_u32.pow(attempt - 1));
            }

            let response = match self.client.get(&url).send() {
                Ok(r) => r,
                Err(e) => {
                    last_err = DataError::NetworkUnreachable(e.to_string());
                    continue;
                }
            };

            if response.status().as_u16() == 429 {
                last_err = DataError::RateLimited;
                continue;
            }

            let parsed: ChartResponse = match response.json() {
                Ok(p) => p,
                Err(e) => {
                    last_err = DataError::ResponseFormatChanged(e.to_string());
                    continue;
                }
            };

            return parse_response(symbol, parsed);
        }

        Err(last_err)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the chart API response into sane, ascending bars.
fn parse_response(symbol: &str, resp: ChartResponse) -> Result<FetchedSeries, DataError> {
    let result = resp.chart.result.ok_or_else(|| {
        if let Some(err) = resp.chart.error {
            if err.code == "Not Found" {
                DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                }
            } else {
                DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
            }
        } else {
            DataError::ResponseFormatChanged("empty result with no error".into())
        }
    })?;

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

    let timestamps = data
        .timestamp
        .ok_or_else(|| DataError::ResponseFormatChanged("no timestamps".into()))?;

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

    let company_name = data
        .meta
        .and_then(|m| m.long_name.or(m.short_name))
        .filter(|n| !n.is_empty());

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        // Skip bars with any missing field (halted days, partial rows).
        let (open, high, low, close, volume) = match (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
            quote.volume.get(i).copied().flatten(),
        ) {
            (Some(o), Some(h), Some(l), Some(c), Some(v)) => (o, h, l, c, v),
            _ => continue,
        };

        let date = chrono::DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| DataError::ResponseFormatChanged(format!("bad timestamp {ts}")))?
            .date_naive();

        bars.push(PriceBar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    if bars.is_empty() {
        return Err(DataError::EmptyData {
            symbol: symbol.to_string(),
        });
    }

    Ok(FetchedSeries { bars, company_name })
}
