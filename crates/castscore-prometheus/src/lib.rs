// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prometheus metrics for castscore.
//!
//! Recording goes through the metrics-rs facade, so the helpers in
//! [`recording`] are no-ops until a recorder is installed. The gateway
//! serves [`PrometheusExporter::render`] on `/metrics`.

pub mod recording;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use castscore_core::CastscoreError;

pub use recording::{
    record_aggregation_latency, record_hub_call, record_request, record_tolerated_failure,
    set_cache_entries, RequestOutcome,
};

/// Owns the installed Prometheus recorder.
#[derive(Clone)]
pub struct PrometheusExporter {
    handle: PrometheusHandle,
}

impl PrometheusExporter {
    /// Installs the Prometheus recorder globally.
    ///
    /// Only one recorder can be installed per process; a second call fails.
    pub fn install() -> Result<Self, CastscoreError> {
        let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
            CastscoreError::Internal(format!("failed to install Prometheus recorder: {e}"))
        })?;

        recording::register_metrics();

        tracing::info!("prometheus metrics recorder installed");

        Ok(Self { handle })
    }

    /// All collected metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}
