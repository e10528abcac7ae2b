// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the castscore workspace.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::error::CastscoreError;

/// Largest integer a JSON number can carry without loss.
const MAX_SAFE_FID: f64 = 9_007_199_254_740_991.0;

/// A validated account identity: a positive whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fid(u64);

impl Fid {
    /// Wrap a raw id, rejecting zero.
    pub fn new(raw: u64) -> Result<Self, CastscoreError> {
        if raw == 0 {
            return Err(CastscoreError::InvalidIdentity("invalid fid".into()));
        }
        Ok(Self(raw))
    }

    /// Parse a caller-supplied query value.
    ///
    /// Accepts anything that reads as a finite, positive, integral number
    /// (`"12"`, `" 12 "`, `"1e3"`, `"12.0"`). `None` means the parameter
    /// was absent altogether; an empty or blank value is treated the same.
    pub fn parse(raw: Option<&str>) -> Result<Self, CastscoreError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(CastscoreError::InvalidIdentity("missing fid".into()));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| CastscoreError::InvalidIdentity("invalid fid".into()))?;

        if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value > MAX_SAFE_FID {
            return Err(CastscoreError::InvalidIdentity("invalid fid".into()));
        }

        Ok(Self(value as u64))
    }

    /// The raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five paginated Hub resources fetched for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum HubResource {
    /// Casts authored by the identity. The only load-bearing resource.
    Casts,
    /// Like reactions made by the identity.
    Likes,
    /// Outbound follow links.
    Following,
    /// Inbound follow links.
    Followers,
    /// Profile user-data records.
    UserData,
}

impl HubResource {
    /// Whether a failure of this fetch aborts the whole aggregation.
    pub fn is_load_bearing(self) -> bool {
        matches!(self, Self::Casts)
    }

    /// Short label used in logs and metrics.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Canonical, normalized profile. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub pfp_url: Option<String>,
}

impl Profile {
    pub fn has_pfp(&self) -> bool {
        self.pfp_url.is_some()
    }

    /// A display name counts as present if either the display name or the
    /// username is set.
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some() || self.username.is_some()
    }

    pub fn has_bio(&self) -> bool {
        self.bio.is_some()
    }
}

/// Page lengths observed for the four counted resources.
///
/// These are samples bounded by `page_size`, never totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleCounts {
    pub casts: u32,
    pub likes: u32,
    pub following: u32,
    pub followers: u32,
    pub page_size: u32,
}

/// Per-category score with advisory notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Profile completeness, 0..=20.
    pub profile: u32,
    /// Casting and engagement, 0..=50.
    pub activity: u32,
    /// Follow graph, 0..=30.
    pub social: u32,
    /// Sum of the three categories, 0..=100.
    pub total: u32,
    pub notes: Vec<String>,
}

/// Where the numbers came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Base URL of the Hub that was queried.
    pub hub: String,
    pub note: String,
}

/// The full response for one identity, as served and as cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePayload {
    pub fid: Fid,
    pub profile: Profile,
    pub samples: SampleCounts,
    pub breakdown: ScoreBreakdown,
    pub source: SourceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_integer() {
        assert_eq!(Fid::parse(Some("123")).unwrap().get(), 123);
    }

    #[test]
    fn parse_accepts_numeric_forms() {
        assert_eq!(Fid::parse(Some(" 42 ")).unwrap().get(), 42);
        assert_eq!(Fid::parse(Some("1e3")).unwrap().get(), 1000);
        assert_eq!(Fid::parse(Some("7.0")).unwrap().get(), 7);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        for raw in ["0", "-5", "abc", "1.5", "NaN", "inf", "1e300"] {
            let err = Fid::parse(Some(raw)).unwrap_err();
            assert!(
                matches!(err, CastscoreError::InvalidIdentity(ref m) if m == "invalid fid"),
                "{raw:?} should be invalid, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_missing_is_distinct() {
        for raw in [None, Some(""), Some("   "), Some("\t")] {
            let err = Fid::parse(raw).unwrap_err();
            assert!(
                matches!(err, CastscoreError::InvalidIdentity(ref m) if m == "missing fid"),
                "{raw:?} should be missing, got {err:?}"
            );
        }
    }

    #[test]
    fn new_rejects_zero() {
        assert!(Fid::new(0).is_err());
        assert_eq!(Fid::new(9).unwrap().to_string(), "9");
    }

    #[test]
    fn only_casts_is_load_bearing() {
        use strum::IntoEnumIterator;
        let bearing: Vec<_> = HubResource::iter().filter(|r| r.is_load_bearing()).collect();
        assert_eq!(bearing, vec![HubResource::Casts]);
        assert_eq!(HubResource::UserData.label(), "user_data");
    }

    #[test]
    fn profile_display_name_falls_back_to_username() {
        let profile = Profile {
            username: Some("alice".into()),
            ..Profile::default()
        };
        assert!(profile.has_display_name());
        assert!(!profile.has_pfp());
        assert!(!profile.has_bio());
    }

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let payload = ScorePayload {
            fid: Fid::new(3).unwrap(),
            profile: Profile {
                pfp_url: Some("https://img/x.png".into()),
                ..Profile::default()
            },
            samples: SampleCounts {
                page_size: 100,
                ..SampleCounts::default()
            },
            breakdown: ScoreBreakdown::default(),
            source: SourceInfo {
                hub: "https://hub.example".into(),
                note: "n".into(),
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fid"], 3);
        assert_eq!(json["profile"]["pfpUrl"], "https://img/x.png");
        assert!(json["profile"]["displayName"].is_null());
        assert_eq!(json["samples"]["pageSize"], 100);
        assert!(json["breakdown"]["notes"].as_array().unwrap().is_empty());
        assert_eq!(json["source"]["hub"], "https://hub.example");
    }
}
