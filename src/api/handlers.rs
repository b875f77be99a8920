//! API handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::{Error, Result};
use crate::series::{IterationCount, PiEstimate};

/// Query parameter carrying the number of series terms
pub const ITERATIONS_PARAM: &str = "iterations";

/// Approximate π with the requested number of series terms
///
/// Responds with the estimate as plain text with 10 fractional digits. A
/// missing or malformed `iterations` parameter yields the invalid-parameter
/// body instead, without computing anything.
pub async fn picalc(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse> {
    tracing::info!("Pi calculator received a request");

    let iterations = parse_iterations(query)?;

    let estimate = if state.should_offload(iterations.get()) {
        tracing::debug!(iterations = iterations.get(), "summing on blocking pool");
        tokio::task::spawn_blocking(move || iterations.estimate()).await?
    } else {
        iterations.estimate()
    };

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render(estimate),
    ))
}

fn parse_iterations(
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<IterationCount> {
    let Query(pairs) = query.map_err(|e| Error::invalid_parameter(e.body_text()))?;

    let raw = pairs
        .into_iter()
        .find(|(key, _)| key == ITERATIONS_PARAM)
        .map(|(_, value)| value)
        .ok_or_else(|| Error::invalid_parameter("missing"))?;

    raw.parse::<IterationCount>().map_err(|e| {
        tracing::debug!(error = %e, "rejecting iterations parameter");
        Error::invalid_parameter(e.to_string())
    })
}

fn render(estimate: PiEstimate) -> String {
    format!("{}\n", estimate)
}

/// Liveness check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}
