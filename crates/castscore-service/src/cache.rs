// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time-bounded, in-process score cache.
//!
//! Entries are whole values replaced atomically on insert and never mutated
//! in place. Nothing is ever evicted: a stale entry simply reads as a miss
//! until the next successful aggregation overwrites it.

use std::sync::Arc;
use std::time::Duration;

use castscore_core::{Clock, Fid, ScorePayload};
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;

/// How long a computed score is served without touching the Hub.
pub const CACHE_TTL: Duration = Duration::from_millis(300_000);

/// One cached payload and when it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Arc<ScorePayload>,
    pub stored_at: DateTime<Utc>,
}

/// Identity-keyed cache with an injected clock.
pub struct ScoreCache {
    entries: DashMap<Fid, CacheEntry>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl ScoreCache {
    /// A cache with the standard [`CACHE_TTL`].
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(clock, CACHE_TTL)
    }

    pub fn with_ttl(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    /// The cached payload for `fid`, if one was stored less than a TTL ago.
    pub fn get(&self, fid: Fid) -> Option<Arc<ScorePayload>> {
        let now = self.clock.now();
        self.entries
            .get(&fid)
            .filter(|entry| now - entry.stored_at < self.ttl)
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Stores `value` for `fid` stamped with the current time, replacing any
    /// previous entry.
    pub fn insert(&self, fid: Fid, value: Arc<ScorePayload>) {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now(),
        };
        self.entries.insert(fid, entry);
    }

    /// Number of entries held, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }
}
