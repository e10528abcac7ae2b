// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregation and caching for castscore.
//!
//! [`ScoreService`] fans out to the Hub for one identity, applies a
//! per-resource failure policy, normalizes and scores the result, and keeps
//! it in a [`ScoreCache`] for five minutes.

pub mod cache;
pub mod service;

pub use cache::{CacheEntry, ScoreCache, CACHE_TTL};
pub use service::{ScoreService, SOURCE_NOTE};
