// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Hub's paginated read endpoints.
//!
//! Provides [`HubClient`], which issues one GET per call with an
//! `Accept: application/json` header and a bounded timeout. There is no
//! retry: a failed attempt is returned to the caller, who decides whether
//! it is fatal.

use std::time::Duration;

use async_trait::async_trait;
use castscore_config::model::HubConfig;
use castscore_core::{CastscoreError, Fid, HubApi, HubError, HubResource};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use tracing::debug;

use crate::endpoints::resource_url;

/// HTTP client for Hub communication.
#[derive(Debug, Clone)]
pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl HubClient {
    /// Creates a client from the `[hub]` config section.
    pub fn new(config: &HubConfig) -> Result<Self, CastscoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("castscore/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CastscoreError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// GETs `url` and parses the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value, HubError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HubError::Transport {
                url: url.to_string(),
                message: if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        debug!(status = %status, url, "hub response received");

        if !status.is_success() {
            return Err(HubError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| HubError::Transport {
            url: url.to_string(),
            message: format!("failed to read response body: {e}"),
        })?;

        serde_json::from_str(&body).map_err(|e| HubError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl HubApi for HubClient {
    async fn fetch_messages(
        &self,
        resource: HubResource,
        fid: Fid,
    ) -> Result<Vec<Value>, HubError> {
        let url = self.endpoint_url(resource, fid);
        let body = self.get_json(&url).await?;
        Ok(messages_of(body))
    }

    fn endpoint_url(&self, resource: HubResource, fid: Fid) -> String {
        resource_url(&self.base_url, resource, fid, self.page_size)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// Takes the `messages` array out of a Hub page, or nothing if the body has
/// another shape.
pub fn messages_of(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("messages") {
            Some(Value::Array(messages)) => messages,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
