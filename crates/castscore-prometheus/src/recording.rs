// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.

use castscore_core::HubResource;
use metrics::{describe_counter, describe_gauge, describe_histogram};

/// How a score request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Hit,
    Miss,
    Invalid,
    Failed,
}

impl RequestOutcome {
    fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Invalid => "invalid",
            Self::Failed => "failed",
        }
    }
}

/// Register metric descriptions. Called once after the recorder is installed.
pub fn register_metrics() {
    describe_counter!("castscore_requests_total", "Score requests by outcome");
    describe_counter!(
        "castscore_hub_requests_total",
        "Upstream Hub calls by resource and outcome"
    );
    describe_counter!(
        "castscore_hub_tolerated_failures_total",
        "Best-effort Hub failures replaced with empty results"
    );
    describe_histogram!(
        "castscore_aggregation_seconds",
        "Wall time of a full upstream aggregation"
    );
    describe_gauge!("castscore_cache_entries", "Entries held by the score cache");
}

pub fn record_request(outcome: RequestOutcome) {
    metrics::counter!("castscore_requests_total", "outcome" => outcome.label()).increment(1);
}

pub fn record_hub_call(resource: HubResource, ok: bool) {
    metrics::counter!(
        "castscore_hub_requests_total",
        "resource" => resource.label(),
        "outcome" => if ok { "ok" } else { "error" }
    )
    .increment(1);
}

pub fn record_tolerated_failure(resource: HubResource) {
    metrics::counter!("castscore_hub_tolerated_failures_total", "resource" => resource.label())
        .increment(1);
}

pub fn record_aggregation_latency(seconds: f64) {
    metrics::histogram!("castscore_aggregation_seconds").record(seconds);
}

pub fn set_cache_entries(count: usize) {
    metrics::gauge!("castscore_cache_entries").set(count as f64);
}
