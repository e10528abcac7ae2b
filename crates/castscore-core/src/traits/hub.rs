// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only access to the upstream Hub.

use async_trait::async_trait;

use crate::error::HubError;
use crate::types::{Fid, HubResource};

/// Fetches one page of one resource for one identity.
///
/// Implementations make a single attempt. Retry and tolerance are the
/// caller's business.
#[async_trait]
pub trait HubApi: Send + Sync + 'static {
    /// Returns the `messages` array of the page, or an empty list when the
    /// response carries none.
    async fn fetch_messages(
        &self,
        resource: HubResource,
        fid: Fid,
    ) -> Result<Vec<serde_json::Value>, HubError>;

    /// Full URL of the page `fetch_messages` requests, used to label
    /// failures detected outside the call itself.
    fn endpoint_url(&self, resource: HubResource, fid: Fid) -> String;

    /// Base URL reported in response metadata.
    fn base_url(&self) -> &str;

    /// Page size requested for the paginated resources.
    fn page_size(&self) -> u32;
}
