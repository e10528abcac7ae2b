// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-name alias tables for user-data normalization.
//!
//! Producers disagree on casing and on how the field type is encoded
//! (symbolic enum name, numeric code, informal string). Every table here is
//! tried in order and the first usable hit wins.

/// Paths to the user-data body inside one message.
pub const BODY_PATHS: &[&[&str]] = &[
    &["data", "userDataBody"],
    &["data", "user_data_body"],
    &["data", "body", "userDataBody"],
    &["data", "body", "user_data_body"],
];

/// Keys holding the field-type discriminator inside a body.
pub const TYPE_KEYS: &[&str] = &["type", "userDataType", "user_data_type"];

/// Key holding the field value inside a body.
pub const VALUE_KEY: &str = "value";

/// A canonical profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    PfpUrl,
    DisplayName,
    Bio,
    Username,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::PfpUrl,
        ProfileField::DisplayName,
        ProfileField::Bio,
        ProfileField::Username,
    ];

    /// Type keys that resolve to this field, highest priority first.
    ///
    /// The numeric codes are the ones earlier deployments keyed on; they do
    /// not match the current protobuf numbering (where 1 is PFP and 6 is
    /// USERNAME), so the symbolic names are always tried first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::PfpUrl => &["USER_DATA_TYPE_PFP", "6", "pfp"],
            Self::DisplayName => &["USER_DATA_TYPE_DISPLAY", "2", "display"],
            Self::Bio => &["USER_DATA_TYPE_BIO", "3", "bio"],
            Self::Username => &[
                "USER_DATA_TYPE_FNAME",
                "USER_DATA_TYPE_USERNAME",
                "1",
                "fname",
                "username",
            ],
        }
    }
}
