// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for castscore.

use thiserror::Error;

/// A single failed call to the upstream Hub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HubError {
    /// The Hub answered with a non-2xx status.
    #[error("Hub error {status} for {url}")]
    Status { status: u16, url: String },

    /// The request never produced a response (connect failure, timeout).
    #[error("Hub request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The Hub answered 2xx but the body was not JSON.
    #[error("Hub response from {url} was not valid JSON: {message}")]
    Decode { url: String, message: String },
}

impl HubError {
    /// The URL of the failed call.
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }

    /// The upstream status code, if the Hub answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The primary error type used across castscore.
#[derive(Debug, Error)]
pub enum CastscoreError {
    /// Caller-supplied identity failed validation. Never retried.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// The load-bearing fetch failed, so no score could be produced.
    #[error("failed to compute score: {source}")]
    AggregationFailed { source: HubError },

    /// Configuration errors (invalid values, unreadable files).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP server errors (bind failure, serve loop exit).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CastscoreError {
    /// True for errors caused by the caller rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidIdentity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_url() {
        let err = HubError::Status {
            status: 404,
            url: "https://hub.example/v1/castsByFid?fid=1&pageSize=100".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("castsByFid"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = HubError::Transport {
            url: "https://hub.example".into(),
            message: "timed out".into(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.url(), "https://hub.example");
    }

    #[test]
    fn aggregation_failed_wraps_hub_error() {
        use std::error::Error as _;

        let err = CastscoreError::AggregationFailed {
            source: HubError::Status {
                status: 500,
                url: "u".into(),
            },
        };
        assert!(err.to_string().starts_with("failed to compute score"));
        assert!(err.source().is_some());
        assert!(!err.is_client_error());
    }

    #[test]
    fn invalid_identity_is_client_error() {
        assert!(CastscoreError::InvalidIdentity("invalid fid".into()).is_client_error());
    }
}
