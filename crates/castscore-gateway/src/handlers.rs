// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! Handles GET /score, GET /health, GET /metrics.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use castscore_core::CastscoreError;
use serde::Serialize;

use crate::server::GatewayState;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
    /// Upstream failure detail, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the gateway started.
    pub uptime_secs: u64,
    /// Cache entries currently held, fresh or stale.
    pub cached_entries: usize,
}

/// GET /score?fid=<n>
///
/// The query is taken as raw pairs so a repeated `fid` resolves to its first
/// value instead of failing deserialization.
pub async fn get_score(
    State(state): State<GatewayState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match state.service.score_for_query(first_fid(&params)).await {
        Ok(payload) => {
            let cache_control = format!("public, max-age={}", state.client_max_age_secs);
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, cache_control)],
                Json(payload.as_ref()),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
        cached_entries: state.service.cache().len(),
    })
}

/// GET /metrics
///
/// Prometheus text exposition, or 404 when the exporter is disabled.
pub async fn get_metrics(State(state): State<GatewayState>) -> Response {
    match &state.health.prometheus_render {
        Some(render) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            render(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "metrics disabled".to_string(),
                details: None,
            }),
        )
            .into_response(),
    }
}

/// Maps a service error onto the public error contract.
fn error_response(err: &CastscoreError) -> Response {
    let (status, body) = match err {
        CastscoreError::InvalidIdentity(message) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse {
                error: sentence_case(message),
                details: None,
            },
        ),
        CastscoreError::AggregationFailed { source } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse {
                error: "Failed to compute score".to_string(),
                details: Some(source.to_string()),
            },
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse {
                error: "Failed to compute score".to_string(),
                details: Some(other.to_string()),
            },
        ),
    };
    (status, Json(body)).into_response()
}

/// The first `fid` value in query order.
fn first_fid(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "fid")
        .map(|(_, value)| value.as_str())
}

fn sentence_case(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
