// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-data normalization.
//!
//! Never fails: a message whose shape is not understood contributes nothing.
//! Duplicate types resolve last-in-input-order, which is not necessarily the
//! most recent write since Hub pages are not guaranteed to be chronological.

use std::collections::HashMap;

use castscore_core::Profile;
use serde_json::Value;
use tracing::trace;

use crate::aliases::{ProfileField, BODY_PATHS, TYPE_KEYS, VALUE_KEY};

/// One `(type, value)` pair pulled out of a user-data message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDataField {
    /// The type discriminator as a string key (`"USER_DATA_TYPE_BIO"`, `"3"`, ...).
    pub kind: String,
    pub value: String,
}

/// Pulls every usable `(type, value)` pair out of `messages`, in input order.
pub fn extract_user_data(messages: &[Value]) -> Vec<UserDataField> {
    messages.iter().filter_map(extract_field).collect()
}

/// Folds user-data messages into a canonical [`Profile`].
pub fn normalize_profile(messages: &[Value]) -> Profile {
    profile_from_fields(&fold_fields(extract_user_data(messages)))
}

/// Type key to value, last occurrence winning.
pub fn fold_fields(fields: Vec<UserDataField>) -> HashMap<String, String> {
    fields
        .into_iter()
        .map(|field| (field.kind, field.value))
        .collect()
}

/// Picks each profile field from the first alias present in `fields`.
pub fn profile_from_fields(fields: &HashMap<String, String>) -> Profile {
    let pick = |field: ProfileField| {
        field
            .aliases()
            .iter()
            .filter_map(|alias| fields.get(*alias))
            .find(|value| !value.is_empty())
            .cloned()
    };

    Profile {
        username: pick(ProfileField::Username),
        display_name: pick(ProfileField::DisplayName),
        bio: pick(ProfileField::Bio),
        pfp_url: pick(ProfileField::PfpUrl),
    }
}

fn extract_field(message: &Value) -> Option<UserDataField> {
    let Some(body) = BODY_PATHS
        .iter()
        .filter_map(|path| lookup(message, path))
        .find(|candidate| is_truthy(candidate))
    else {
        trace!("user-data message has no body");
        return None;
    };

    let kind = TYPE_KEYS
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|candidate| !candidate.is_null())
        .and_then(type_key);

    let value = body
        .get(VALUE_KEY)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty());

    match (kind, value) {
        (Some(kind), Some(value)) => Some(UserDataField {
            kind,
            value: value.to_string(),
        }),
        _ => {
            trace!("user-data message skipped: unresolvable type or non-string value");
            None
        }
    }
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Mirrors the loose truthiness producers rely on: null, false, zero and
/// the empty string do not count as present.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integral values below this print as plain digits in JavaScript.
const MAX_PLAIN_INTEGER: f64 = 1e21;

/// String key for a type discriminator, if it can be one. Numbers are keyed
/// the way JavaScript prints them, so `6` and `6.0` share the key `"6"`.
fn type_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if is_truthy(value) => Some(number_key(n)),
        _ => None,
    }
}

fn number_key(n: &serde_json::Number) -> String {
    if let Some(code) = n.as_u64() {
        return code.to_string();
    }
    if let Some(code) = n.as_i64() {
        return code.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < MAX_PLAIN_INTEGER => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(body: Value) -> Value {
        json!({"data": {"type": "MESSAGE_TYPE_USER_DATA_ADD", "userDataBody": body}})
    }

    #[test]
    fn empty_input_yields_empty_profile() {
        assert_eq!(normalize_profile(&[]), Profile::default());
    }

    #[test]
    fn symbolic_types_resolve() {
        let messages = vec![
            message(json!({"type": "USER_DATA_TYPE_PFP", "value": "https://i/p.png"})),
            message(json!({"type": "USER_DATA_TYPE_DISPLAY", "value": "Alice"})),
            message(json!({"type": "USER_DATA_TYPE_BIO", "value": "gm"})),
            message(json!({"type": "USER_DATA_TYPE_USERNAME", "value": "alice"})),
        ];
        let profile = normalize_profile(&messages);
        assert_eq!(profile.pfp_url.as_deref(), Some("https://i/p.png"));
        assert_eq!(profile.display_name.as_deref(), Some("Alice"));
        assert_eq!(profile.bio.as_deref(), Some("gm"));
        assert_eq!(profile.username.as_deref(), Some("alice"));
    }

    #[test]
    fn numeric_pfp_code_resolves() {
        let messages = vec![message(json!({"type": 6, "value": "https://i/p.png"}))];
        let profile = normalize_profile(&messages);
        assert_eq!(profile.pfp_url.as_deref(), Some("https://i/p.png"));
    }

    #[test]
    fn integral_float_code_matches_integer_alias() {
        let messages = vec![
            message(json!({"type": 6.0, "value": "https://i/p.png"})),
            message(json!({"type": 3.0, "value": "gm"})),
        ];
        let profile = normalize_profile(&messages);
        assert_eq!(profile.pfp_url.as_deref(), Some("https://i/p.png"));
        assert_eq!(profile.bio.as_deref(), Some("gm"));
    }

    #[test]
    fn number_keys_print_like_javascript() {
        let key = |v: Value| type_key(&v);
        assert_eq!(key(json!(6)).as_deref(), Some("6"));
        assert_eq!(key(json!(6.0)).as_deref(), Some("6"));
        assert_eq!(key(json!(-1)).as_deref(), Some("-1"));
        assert_eq!(key(json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(key(json!(0.0)), None);
    }

    #[test]
    fn unresolvable_type_leaves_field_absent() {
        let messages = vec![message(json!({"type": "USER_DATA_TYPE_LOCATION", "value": "x"}))];
        assert_eq!(normalize_profile(&messages), Profile::default());
    }

    #[test]
    fn alternate_body_and_type_keys_are_accepted() {
        let messages = vec![
            json!({"data": {"user_data_body": {"user_data_type": "bio", "value": "snake"}}}),
            json!({"data": {"body": {"userDataBody": {"userDataType": 2, "value": "Nested"}}}}),
            json!({"data": {"body": {"user_data_body": {"type": "fname", "value": "bob"}}}}),
        ];
        let profile = normalize_profile(&messages);
        assert_eq!(profile.bio.as_deref(), Some("snake"));
        assert_eq!(profile.display_name.as_deref(), Some("Nested"));
        assert_eq!(profile.username.as_deref(), Some("bob"));
    }

    #[test]
    fn first_truthy_body_wins_without_merging() {
        // The first body has a type but no value; the second is never consulted.
        let messages = vec![json!({"data": {
            "userDataBody": {"type": "USER_DATA_TYPE_BIO"},
            "user_data_body": {"type": "USER_DATA_TYPE_BIO", "value": "ignored"}
        }})];
        assert!(extract_user_data(&messages).is_empty());
    }

    #[test]
    fn null_body_falls_through_to_next_path() {
        let messages = vec![json!({"data": {
            "userDataBody": null,
            "user_data_body": {"type": "USER_DATA_TYPE_BIO", "value": "found"}
        }})];
        assert_eq!(normalize_profile(&messages).bio.as_deref(), Some("found"));
    }

    #[test]
    fn non_string_or_empty_values_are_discarded() {
        let messages = vec![
            message(json!({"type": "USER_DATA_TYPE_BIO", "value": 42})),
            message(json!({"type": "USER_DATA_TYPE_DISPLAY", "value": ""})),
            message(json!({"type": 0, "value": "zero"})),
            message(json!({"type": true, "value": "bool"})),
            json!("not an object"),
            json!({"data": null}),
        ];
        assert!(extract_user_data(&messages).is_empty());
    }

    #[test]
    fn duplicate_type_last_in_input_order_wins() {
        let messages = vec![
            message(json!({"type": "USER_DATA_TYPE_BIO", "value": "old"})),
            message(json!({"type": "USER_DATA_TYPE_BIO", "value": "new"})),
        ];
        assert_eq!(normalize_profile(&messages).bio.as_deref(), Some("new"));
    }

    #[test]
    fn symbolic_alias_beats_numeric_code() {
        let messages = vec![
            message(json!({"type": "USER_DATA_TYPE_DISPLAY", "value": "Symbolic"})),
            message(json!({"type": 2, "value": "Numeric"})),
        ];
        assert_eq!(
            normalize_profile(&messages).display_name.as_deref(),
            Some("Symbolic")
        );
    }

    #[test]
    fn extracted_fields_keep_input_order() {
        let messages = vec![
            message(json!({"type": "pfp", "value": "a"})),
            message(json!({"type": 3, "value": "b"})),
        ];
        let fields = extract_user_data(&messages);
        assert_eq!(
            fields,
            vec![
                UserDataField {
                    kind: "pfp".into(),
                    value: "a".into()
                },
                UserDataField {
                    kind: "3".into(),
                    value: "b".into()
                },
            ]
        );
    }
}
