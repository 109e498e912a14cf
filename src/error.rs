use std::error::Error;
use std::fmt;

use serde_json::{Value, json};
use warp::reject::Reject;

use crate::constants::{ERROR_METHOD_NOT_ALLOWED, ERROR_PROCESSING_FAILED};

/// Error type for the relay handler
#[derive(Debug, Clone)]
pub struct RelayError {
    pub message: String,
    pub status_code: u16,
    /// Status reported by the completion API, surfaced to the client verbatim
    pub upstream_status: Option<u16>,
    kind: RelayErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelayErrorKind {
    InvalidRequest,
    Misconfiguration,
    UpstreamFailure,
    InternalFailure,
}

impl RelayError {
    pub fn method_not_allowed() -> Self {
        Self {
            message: ERROR_METHOD_NOT_ALLOWED.to_string(),
            status_code: 405,
            upstream_status: None,
            kind: RelayErrorKind::InvalidRequest,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 400,
            upstream_status: None,
            kind: RelayErrorKind::InvalidRequest,
        }
    }

    pub fn misconfigured(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 500,
            upstream_status: None,
            kind: RelayErrorKind::Misconfiguration,
        }
    }

    /// Non-2xx answer from the completion API.
    pub fn upstream_status(message: String, status: u16) -> Self {
        Self {
            message,
            status_code: 502,
            upstream_status: Some(status),
            kind: RelayErrorKind::UpstreamFailure,
        }
    }

    /// 2xx answer whose completion text is unusable.
    pub fn upstream_payload(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 502,
            upstream_status: None,
            kind: RelayErrorKind::UpstreamFailure,
        }
    }

    /// Anything unexpected. The cause is logged here and the client only sees
    /// the generic processing message.
    pub fn internal(cause: &str) -> Self {
        log::error!("relay error: {}", cause);
        Self {
            message: ERROR_PROCESSING_FAILED.to_string(),
            status_code: 500,
            upstream_status: None,
            kind: RelayErrorKind::InternalFailure,
        }
    }

    pub fn is_misconfiguration(&self) -> bool {
        self.kind == RelayErrorKind::Misconfiguration
    }

    pub fn is_upstream_failure(&self) -> bool {
        self.kind == RelayErrorKind::UpstreamFailure
    }

    pub fn is_internal(&self) -> bool {
        self.kind == RelayErrorKind::InternalFailure
    }

    /// Body sent to the client: `{ error }`, plus `status` when the upstream reported one.
    pub fn to_json(&self) -> Value {
        match self.upstream_status {
            Some(status) => json!({ "error": self.message, "status": status }),
            None => json!({ "error": self.message }),
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upstream_status {
            Some(upstream) => write!(
                f,
                "RelayError {}: {} (upstream {})",
                self.status_code, self.message, upstream
            ),
            None => write!(f, "RelayError {}: {}", self.status_code, self.message),
        }
    }
}

impl Error for RelayError {}

impl Reject for RelayError {}
