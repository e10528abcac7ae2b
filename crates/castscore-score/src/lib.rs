// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure, I/O-free half of the pipeline.
//!
//! [`normalize`] folds loosely-typed Hub user-data messages into a canonical
//! [`Profile`](castscore_core::Profile); [`engine`] turns profile flags and
//! sample counts into a [`ScoreBreakdown`](castscore_core::ScoreBreakdown).

pub mod aliases;
pub mod engine;
pub mod normalize;

pub use engine::{compute_score, ScoreInputs};
pub use normalize::{extract_user_data, normalize_profile, UserDataField};
