// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hub-shaped JSON builders.

use serde_json::{json, Value};

/// `n` placeholder messages, for resources that are only counted.
pub fn messages(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({"hash": format!("0x{i:04x}")})).collect()
}

/// A `{"messages": [...]}` page body.
pub fn page(messages: Vec<Value>) -> Value {
    json!({"messages": messages, "nextPageToken": ""})
}

/// One user-data message in the Hub's camelCase shape.
pub fn user_data(kind: impl Into<Value>, value: &str) -> Value {
    json!({
        "data": {
            "type": "MESSAGE_TYPE_USER_DATA_ADD",
            "userDataBody": {"type": kind.into(), "value": value}
        }
    })
}
