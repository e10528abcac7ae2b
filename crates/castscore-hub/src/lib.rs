// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Farcaster Hub.
//!
//! [`HubClient`] implements [`castscore_core::HubApi`] over the Hub's public,
//! unauthenticated `/v1` endpoints.

pub mod client;
pub mod endpoints;

pub use client::{messages_of, HubClient};
pub use endpoints::resource_url;
