//! Yahoo Finance API client for candle retrieval.
//!
//! Uses the unofficial chart endpoint; intraday forex candles need no API
//! key. Rows missing a close are dropped before they reach the engine.

use crate::types::Candle;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
}

impl YahooFinanceClient {
    /// Create a new client with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch candles for a ticker.
    ///
    /// Arguments:
    /// - ticker: Yahoo symbol (e.g. "EURUSD=X")
    /// - range: lookback window ("1d", "5d", "1mo", ...)
    /// - interval: bar size ("1m", "5m", "1h", "1d", ...)
    pub async fn get_candles(
        &self,
        ticker: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, String> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval={}&includePrePost=false",
            ticker, range, interval
        );

        debug!("Fetching Yahoo Finance candles: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("API error: {}", response.status()));
        }

        let data: ChartResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if let Some(error) = data.chart.error {
            return Err(format!(
                "Yahoo API error: {} - {}",
                error.code, error.description
            ));
        }

        let result = data
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| "No results in response".to_string())?;

        let timestamps = result
            .timestamp
            .ok_or_else(|| "No timestamps in response".to_string())?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| "No quote data in response".to_string())?;

        let opens = quote.open.unwrap_or_default();
        let highs = quote.high.unwrap_or_default();
        let lows = quote.low.unwrap_or_default();
        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();

        let mut candles = Vec::new();
        for (i, &timestamp) in timestamps.iter().enumerate() {
            let close = match closes.get(i).and_then(|v| *v) {
                Some(c) if c > 0.0 => c,
                _ => continue, // incomplete row
            };
            let open = opens.get(i).and_then(|v| *v).unwrap_or(close);
            let high = highs.get(i).and_then(|v| *v).unwrap_or(close);
            let low = lows.get(i).and_then(|v| *v).unwrap_or(close);
            let volume = volumes.get(i).and_then(|v| *v).unwrap_or(0) as f64;

            candles.push(Candle {
                time: timestamp * 1000, // seconds to milliseconds
                open,
                high,
                low,
                close,
                volume,
            });
        }

        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_error_deserialization() {
        let json = r#"{
            "code": "Not Found",
            "description": "No data found, symbol may be delisted"
        }"#;
        let error: ChartError = serde_json::from_str(json).unwrap();
        assert_eq!(error.code, "Not Found");
        assert!(error.description.contains("delisted"));
    }

    #[test]
    fn test_chart_with_error_and_no_result() {
        let json = r#"{
            "result": null,
            "error": {"code": "Not Found", "description": "No data"}
        }"#;
        let chart: Chart = serde_json::from_str(json).unwrap();
        assert!(chart.result.is_none());
        assert_eq!(chart.error.unwrap().code, "Not Found");
    }

    #[test]
    fn test_quote_deserialization_with_nulls() {
        let json = r#"{
            "open": [1.05, null, 1.06],
            "high": [1.07, null, 1.08],
            "low": [1.04, null, 1.05],
            "close": [1.06, null, 1.07],
            "volume": [0, null, 0]
        }"#;
        let quote: ChartQuote = serde_json::from_str(json).unwrap();
        let closes = quote.close.unwrap();
        assert_eq!(closes[0], Some(1.06));
        assert_eq!(closes[1], None);
    }

    #[test]
    fn test_full_response_deserialization() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "EURUSD=X"},
                    "timestamp": [1700000000, 1700000060],
                    "indicators": {
                        "quote": [{
                            "open": [1.05, 1.06],
                            "high": [1.07, 1.08],
                            "low": [1.04, 1.05],
                            "close": [1.06, 1.07],
                            "volume": [0, 0]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let parsed: ChartResponse = serde_json::from_str(json).unwrap();
        let result = parsed.chart.result.unwrap();
        assert_eq!(result[0].timestamp.as_ref().unwrap().len(), 2);
        assert_eq!(result[0].indicators.quote.len(), 1);
    }

    #[test]
    fn test_client_creation() {
        let _client = YahooFinanceClient::new(Duration::from_secs(30));
    }
}
