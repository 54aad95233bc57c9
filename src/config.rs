use std::env;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Lookback window requested from the candle provider.
    pub candle_range: String,
    /// Bar size requested from the candle provider.
    pub candle_interval: String,
    /// Timeout for upstream candle requests.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        Self {
            host,
            port,
            candle_range: env::var("CANDLE_RANGE").unwrap_or_else(|_| "1d".to_string()),
            candle_interval: env::var("CANDLE_INTERVAL").unwrap_or_else(|_| "1m".to_string()),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
