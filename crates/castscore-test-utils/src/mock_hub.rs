// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process [`HubApi`] double.
//!
//! Every resource answers with an empty page unless told otherwise, and
//! every call is counted so tests can assert on upstream traffic.

use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use castscore_core::{Fid, HubApi, HubError, HubResource};

/// Base URL reported by [`MockHub`].
pub const MOCK_HUB_URL: &str = "mock://hub";

/// A programmable Hub.
pub struct MockHub {
    responses: DashMap<HubResource, Result<Vec<Value>, u16>>,
    calls: DashMap<HubResource, usize>,
    delay: Option<Duration>,
    delays: DashMap<HubResource, Duration>,
    page_size: u32,
}

impl MockHub {
    pub fn new() -> Self {
        Self {
            responses: DashMap::new(),
            calls: DashMap::new(),
            delay: None,
            delays: DashMap::new(),
            page_size: 100,
        }
    }

    /// Every call sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Calls for `resource` sleep for `delay`, overriding [`Self::with_delay`].
    pub fn delay(&self, resource: HubResource, delay: Duration) {
        self.delays.insert(resource, delay);
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Answer `resource` with `messages`.
    pub fn respond(&self, resource: HubResource, messages: Vec<Value>) {
        self.responses.insert(resource, Ok(messages));
    }

    /// Answer `resource` with a 500 from the Hub.
    pub fn fail(&self, resource: HubResource) {
        self.fail_with(resource, 500);
    }

    /// Answer `resource` with `status` from the Hub.
    pub fn fail_with(&self, resource: HubResource, status: u16) {
        self.responses.insert(resource, Err(status));
    }

    /// Calls made for `resource` so far.
    pub fn calls(&self, resource: HubResource) -> usize {
        self.calls.get(&resource).map(|c| *c).unwrap_or(0)
    }

    /// Calls made across all resources so far.
    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|entry| *entry.value()).sum()
    }
}

impl Default for MockHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HubApi for MockHub {
    async fn fetch_messages(
        &self,
        resource: HubResource,
        fid: Fid,
    ) -> Result<Vec<Value>, HubError> {
        *self.calls.entry(resource).or_insert(0) += 1;

        let delay = self.delays.get(&resource).map(|d| *d).or(self.delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.get(&resource).map(|r| r.value().clone());
        match response {
            Some(Ok(messages)) => Ok(messages),
            Some(Err(status)) => Err(HubError::Status {
                status,
                url: self.endpoint_url(resource, fid),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn endpoint_url(&self, resource: HubResource, fid: Fid) -> String {
        format!("{MOCK_HUB_URL}/{}?fid={fid}", resource.label())
    }

    fn base_url(&self) -> &str {
        MOCK_HUB_URL
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn fid() -> Fid {
        Fid::new(1).unwrap()
    }

    #[tokio::test]
    async fn unconfigured_resources_answer_empty() {
        let hub = MockHub::new();
        let messages = hub.fetch_messages(HubResource::Likes, fid()).await.unwrap();
        assert!(messages.is_empty());
        assert_eq!(hub.calls(HubResource::Likes), 1);
        assert_eq!(hub.calls(HubResource::Casts), 0);
    }

    #[tokio::test]
    async fn configured_failures_and_pages_are_returned() {
        let hub = MockHub::new();
        hub.respond(HubResource::Casts, fixtures::messages(3));
        hub.fail(HubResource::Followers);

        assert_eq!(
            hub.fetch_messages(HubResource::Casts, fid()).await.unwrap().len(),
            3
        );
        let err = hub
            .fetch_messages(HubResource::Followers, fid())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.url(), "mock://hub/followers?fid=1");
        assert_eq!(hub.total_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn per_resource_delay_overrides_default() {
        let hub = MockHub::new().with_delay(Duration::from_millis(10));
        hub.delay(HubResource::Followers, Duration::from_secs(60));

        let started = tokio::time::Instant::now();
        hub.fetch_messages(HubResource::Casts, fid()).await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));

        hub.fetch_messages(HubResource::Followers, fid()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(60));
    }
}
