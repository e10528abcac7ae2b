// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL construction for the five Hub endpoints.

use castscore_core::{Fid, HubResource};

/// Full URL for one resource page.
///
/// `base_url` may carry a trailing slash. The user-data endpoint takes no
/// page size.
pub fn resource_url(base_url: &str, resource: HubResource, fid: Fid, page_size: u32) -> String {
    let base = base_url.trim_end_matches('/');
    match resource {
        HubResource::Casts => {
            format!("{base}/v1/castsByFid?fid={fid}&pageSize={page_size}")
        }
        HubResource::Likes => format!(
            "{base}/v1/reactionsByFid?fid={fid}&reaction_type=like&pageSize={page_size}"
        ),
        HubResource::Following => {
            format!("{base}/v1/linksByFid?fid={fid}&link_type=follow&pageSize={page_size}")
        }
        HubResource::Followers => format!(
            "{base}/v1/linksByTargetFid?target_fid={fid}&link_type=follow&pageSize={page_size}"
        ),
        HubResource::UserData => format!("{base}/v1/userDataByFid?fid={fid}"),
    }
}
