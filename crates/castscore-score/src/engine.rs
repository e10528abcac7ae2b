// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic score computation.
//!
//! Three categories, each a sum of parts that are scaled against the page
//! size, rounded, and capped at the part's weight:
//!
//! | category | parts                                   | ceiling |
//! |----------|-----------------------------------------|---------|
//! | profile  | pfp 8, display name 6, bio 6            | 20      |
//! | activity | casts 35, likes 15                      | 50      |
//! | social   | followers 20, following 10              | 30      |

use castscore_core::{Profile, SampleCounts, ScoreBreakdown};

pub const PROFILE_MAX: u32 = 20;
pub const ACTIVITY_MAX: u32 = 50;
pub const SOCIAL_MAX: u32 = 30;
pub const TOTAL_MAX: u32 = 100;

const PFP_WEIGHT: u32 = 8;
const DISPLAY_NAME_WEIGHT: u32 = 6;
const BIO_WEIGHT: u32 = 6;
const CASTS_WEIGHT: u32 = 35;
const LIKES_WEIGHT: u32 = 15;
const FOLLOWERS_WEIGHT: u32 = 20;
const FOLLOWING_WEIGHT: u32 = 10;

pub const PROFILE_NOTE: &str = "Complete your profile (pfp/display/bio) to increase score.";
pub const ACTIVITY_NOTE: &str = "More casting & engagement increases score (sample-based).";
pub const SOCIAL_NOTE: &str = "More follows & followers increases score (sample-based).";

/// Everything the score depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreInputs {
    pub has_pfp: bool,
    pub has_display_name: bool,
    pub has_bio: bool,
    pub casts_sample: u32,
    pub likes_sample: u32,
    pub following_sample: u32,
    pub followers_sample: u32,
}

impl ScoreInputs {
    /// Inputs derived from a normalized profile and the observed samples.
    pub fn from_parts(profile: &Profile, samples: &SampleCounts) -> Self {
        Self {
            has_pfp: profile.has_pfp(),
            has_display_name: profile.has_display_name(),
            has_bio: profile.has_bio(),
            casts_sample: samples.casts,
            likes_sample: samples.likes,
            following_sample: samples.following,
            followers_sample: samples.followers,
        }
    }
}

/// Computes the breakdown. `page_size` is the divisor for every sample; a
/// zero page size is treated as one.
pub fn compute_score(inputs: &ScoreInputs, page_size: u32) -> ScoreBreakdown {
    let page_size = page_size.max(1);

    let profile = [
        (inputs.has_pfp, PFP_WEIGHT),
        (inputs.has_display_name, DISPLAY_NAME_WEIGHT),
        (inputs.has_bio, BIO_WEIGHT),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, weight)| weight)
    .sum::<u32>()
    .min(PROFILE_MAX);

    let activity = (scaled_part(inputs.casts_sample, page_size, CASTS_WEIGHT)
        + scaled_part(inputs.likes_sample, page_size, LIKES_WEIGHT))
    .min(ACTIVITY_MAX);

    let social = (scaled_part(inputs.followers_sample, page_size, FOLLOWERS_WEIGHT)
        + scaled_part(inputs.following_sample, page_size, FOLLOWING_WEIGHT))
    .min(SOCIAL_MAX);

    let mut notes = Vec::new();
    if profile < PROFILE_MAX {
        notes.push(PROFILE_NOTE.to_string());
    }
    if activity < ACTIVITY_MAX {
        notes.push(ACTIVITY_NOTE.to_string());
    }
    if social < SOCIAL_MAX {
        notes.push(SOCIAL_NOTE.to_string());
    }

    ScoreBreakdown {
        profile,
        activity,
        social,
        total: (profile + activity + social).min(TOTAL_MAX),
        notes,
    }
}

/// `round(sample / page_size * weight)`, capped at `weight`.
fn scaled_part(sample: u32, page_size: u32, weight: u32) -> u32 {
    let scaled = (f64::from(sample) / f64::from(page_size) * f64::from(weight)).round();
    // `scaled` is non-negative; the cap keeps the cast in range.
    (scaled.min(f64::from(weight))) as u32
}
