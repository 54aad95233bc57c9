//! Signal API endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::sources::{asset_names, resolve_ticker};
use crate::types::{CandleSeries, SignalReport};
use crate::AppState;

/// Asset evaluated when the query names none.
const DEFAULT_ASSET: &str = "EUR/USD";

/// Query parameters for the signal endpoint.
#[derive(Debug, Deserialize)]
pub struct SignalQuery {
    /// Friendly asset name (e.g. "EUR/USD").
    pub asset: Option<String>,
}

/// Response for the asset listing endpoint.
#[derive(Serialize)]
pub struct AssetsResponse {
    pub assets: Vec<&'static str>,
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signal", get(get_signal))
        .route("/assets", get(get_assets))
}

/// Evaluate the latest signal for one asset.
async fn get_signal(
    State(state): State<AppState>,
    Query(query): Query<SignalQuery>,
) -> Result<Json<SignalReport>> {
    let asset = query.asset.unwrap_or_else(|| DEFAULT_ASSET.to_string());
    let ticker = resolve_ticker(&asset)
        .ok_or_else(|| AppError::NotFound(format!("Unknown asset: {}", asset)))?;

    let candles = state
        .yahoo_client
        .get_candles(
            ticker,
            &state.config.candle_range,
            &state.config.candle_interval,
        )
        .await
        .map_err(AppError::ExternalApi)?;

    let series = CandleSeries::new(candles);
    Ok(Json(state.signal_service.evaluate(&asset, &series)))
}

/// List the tracked assets.
async fn get_assets() -> Json<AssetsResponse> {
    Json(AssetsResponse {
        assets: asset_names(),
    })
}
