// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for castscore.
//!
//! Holds the types shared by every other crate in the workspace: the error
//! taxonomy, the validated [`Fid`] identity, the response payload, and the
//! two trait seams ([`HubApi`] and [`Clock`]) that the aggregator is built on.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CastscoreError, HubError};
pub use traits::{Clock, HubApi, SystemClock};
pub use types::{
    Fid, HubResource, Profile, SampleCounts, ScoreBreakdown, ScorePayload, SourceInfo,
};
