// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `castscore serve` command implementation.
//!
//! Wires the Hub client, score cache, and aggregation service behind the
//! gateway, then serves until SIGINT or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use castscore_config::model::CastscoreConfig;
use castscore_core::{CastscoreError, SystemClock};
use castscore_gateway::{start_server, GatewayState, HealthState};
use castscore_hub::HubClient;
use castscore_prometheus::PrometheusExporter;
use castscore_service::{ScoreCache, ScoreService};
use tracing::info;

use crate::shutdown;

/// Runs the `castscore serve` command.
pub async fn run_serve(config: CastscoreConfig) -> Result<(), CastscoreError> {
    init_tracing(&config.log.level);

    let prometheus_render = if config.metrics.enabled {
        let exporter = PrometheusExporter::install()?;
        let render: Arc<dyn Fn() -> String + Send + Sync> = Arc::new(move || exporter.render());
        Some(render)
    } else {
        info!("prometheus metrics disabled");
        None
    };

    let service = Arc::new(build_service(&config)?);
    let state = GatewayState::new(
        service,
        HealthState::new(prometheus_render),
        config.server.client_max_age_secs,
    );

    info!(
        hub = %config.hub.base_url,
        page_size = config.hub.page_size,
        "castscore starting"
    );

    let cancel = shutdown::install_signal_handler();
    start_server(&config.server, state, cancel).await?;

    info!("castscore shutdown complete");
    Ok(())
}

/// The Hub client, cache, and service for `config`.
///
/// Each Hub call is bounded one second past the HTTP client's own timeout, so
/// the client reports the timeout whenever it can.
pub fn build_service(config: &CastscoreConfig) -> Result<ScoreService, CastscoreError> {
    let hub = Arc::new(HubClient::new(&config.hub)?);
    let cache = Arc::new(ScoreCache::new(Arc::new(SystemClock)));
    Ok(ScoreService::new(hub, cache)
        .with_call_timeout(Duration::from_secs(config.hub.timeout_secs.saturating_add(1))))
}

/// Initializes the tracing subscriber with the configured log level.
///
/// `RUST_LOG` takes precedence when set. Output goes to stderr so `score`
/// can print its payload on stdout.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("castscore={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
