// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score aggregation over the Hub.
//!
//! Per request: cache hit returns immediately with no network activity.
//! On a miss, five Hub calls run concurrently and are all awaited before
//! anything else happens. Casts are load-bearing; the other four resources
//! fall back to an empty page on failure. The result is normalized, scored,
//! cached, and returned.

use std::sync::Arc;
use std::time::{Duration, Instant};

use castscore_core::{
    CastscoreError, Fid, HubApi, HubError, HubResource, SampleCounts, ScorePayload, SourceInfo,
};
use castscore_prometheus::{self as metrics, RequestOutcome};
use castscore_score::{compute_score, normalize_profile, ScoreInputs};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::cache::ScoreCache;

/// Attached to every payload: the counts are page samples, not totals.
pub const SOURCE_NOTE: &str = "Counts are sample-based (Hub APIs are paginated without totals).";

/// Upper bound on a single Hub call when the service is not told otherwise.
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(15);

/// Computes and caches scores.
pub struct ScoreService {
    hub: Arc<dyn HubApi>,
    cache: Arc<ScoreCache>,
    call_timeout: Duration,
}

impl ScoreService {
    pub fn new(hub: Arc<dyn HubApi>, cache: Arc<ScoreCache>) -> Self {
        Self {
            hub,
            cache,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Bounds every individual Hub call. A call that runs over counts as a
    /// failed call.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    /// Validates a raw `fid` query value, then scores it.
    pub async fn score_for_query(
        &self,
        raw: Option<&str>,
    ) -> Result<Arc<ScorePayload>, CastscoreError> {
        let fid = Fid::parse(raw).inspect_err(|e| {
            debug!(error = %e, "rejected identity");
            metrics::record_request(RequestOutcome::Invalid);
        })?;
        self.get_score(fid).await
    }

    /// The score for `fid`, from cache when fresh.
    pub async fn get_score(&self, fid: Fid) -> Result<Arc<ScorePayload>, CastscoreError> {
        if let Some(hit) = self.cache.get(fid) {
            debug!(%fid, "score cache hit");
            metrics::record_request(RequestOutcome::Hit);
            return Ok(hit);
        }

        debug!(%fid, "score cache miss");
        let started = Instant::now();

        let payload = match self.aggregate(fid).await {
            Ok(payload) => Arc::new(payload),
            Err(e) => {
                error!(%fid, error = %e, "score aggregation failed");
                metrics::record_request(RequestOutcome::Failed);
                return Err(e);
            }
        };

        metrics::record_aggregation_latency(started.elapsed().as_secs_f64());
        metrics::record_request(RequestOutcome::Miss);

        self.cache.insert(fid, Arc::clone(&payload));
        metrics::set_cache_entries(self.cache.len());

        info!(
            %fid,
            total = payload.breakdown.total,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "score computed"
        );
        Ok(payload)
    }

    async fn aggregate(&self, fid: Fid) -> Result<ScorePayload, CastscoreError> {
        let (casts, likes, following, followers, user_data) = tokio::join!(
            self.fetch(HubResource::Casts, fid),
            self.fetch(HubResource::Likes, fid),
            self.fetch(HubResource::Following, fid),
            self.fetch(HubResource::Followers, fid),
            self.fetch(HubResource::UserData, fid),
        );

        let casts = settle(HubResource::Casts, fid, casts)?;
        let likes = settle(HubResource::Likes, fid, likes)?;
        let following = settle(HubResource::Following, fid, following)?;
        let followers = settle(HubResource::Followers, fid, followers)?;
        let user_data = settle(HubResource::UserData, fid, user_data)?;

        let page_size = self.hub.page_size();
        let count = |messages: &[Value]| {
            u32::try_from(messages.len())
                .unwrap_or(u32::MAX)
                .min(page_size)
        };

        let samples = SampleCounts {
            casts: count(&casts),
            likes: count(&likes),
            following: count(&following),
            followers: count(&followers),
            page_size,
        };
        let profile = normalize_profile(&user_data);
        let breakdown = compute_score(&ScoreInputs::from_parts(&profile, &samples), page_size);

        Ok(ScorePayload {
            fid,
            profile,
            samples,
            breakdown,
            source: SourceInfo {
                hub: self.hub.base_url().to_string(),
                note: SOURCE_NOTE.to_string(),
            },
        })
    }

    /// One Hub call, bounded by the call timeout.
    async fn fetch(&self, resource: HubResource, fid: Fid) -> Result<Vec<Value>, HubError> {
        let result = match tokio::time::timeout(
            self.call_timeout,
            self.hub.fetch_messages(resource, fid),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(HubError::Transport {
                url: self.hub.endpoint_url(resource, fid),
                message: format!("timed out after {:?}", self.call_timeout),
            }),
        };

        metrics::record_hub_call(resource, result.is_ok());
        result
    }
}

/// Applies the failure policy for `resource`: a load-bearing failure aborts
/// the aggregation, any other failed page becomes an empty page.
fn settle(
    resource: HubResource,
    fid: Fid,
    result: Result<Vec<Value>, HubError>,
) -> Result<Vec<Value>, CastscoreError> {
    match result {
        Ok(messages) => Ok(messages),
        Err(source) if resource.is_load_bearing() => {
            Err(CastscoreError::AggregationFailed { source })
        }
        Err(e) => {
            warn!(%fid, resource = resource.label(), error = %e, "tolerating hub failure");
            metrics::record_tolerated_failure(resource);
            Ok(Vec::new())
        }
    }
}
