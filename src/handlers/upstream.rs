use serde_json::Value;

use crate::constants::{
    ERROR_EMPTY_COMPLETION, ERROR_INVALID_API_KEY, ERROR_INVALID_COMPLETION_JSON,
    ERROR_RATE_LIMITED, ERROR_UPSTREAM_UNAVAILABLE,
};
use crate::error::RelayError;
use crate::http::UpstreamReply;

/// Client-facing message for a non-2xx completion API status.
pub fn upstream_error_message(status: u16, body: &str) -> String {
    match status {
        401 => ERROR_INVALID_API_KEY.to_string(),
        429 => ERROR_RATE_LIMITED.to_string(),
        s if s >= 500 => ERROR_UPSTREAM_UNAVAILABLE.to_string(),
        _ if body.is_empty() => format!("Upstream error: {}", status),
        _ => body.to_string(),
    }
}

/// Turns a raw upstream reply into the note result.
///
/// Non-2xx replies and unusable completion text are upstream failures (502).
/// A 2xx body that is not JSON at all is an internal failure (500).
pub fn interpret_reply(reply: &UpstreamReply) -> Result<Value, RelayError> {
    if !reply.is_success() {
        let message = upstream_error_message(reply.status, &reply.body);
        log::warn!("completion API returned {}: {}", reply.status, message);
        return Err(RelayError::upstream_status(message, reply.status));
    }

    let envelope: Value = serde_json::from_str(&reply.body)
        .map_err(|e| RelayError::internal(&format!("completion API body is not JSON: {}", e)))?;

    let text = extract_completion_text(&envelope)
        .ok_or_else(|| RelayError::upstream_payload(ERROR_EMPTY_COMPLETION))?;

    serde_json::from_str::<Value>(text).map_err(|e| {
        log::warn!("completion text is not valid JSON: {}", e);
        RelayError::upstream_payload(ERROR_INVALID_COMPLETION_JSON)
    })
}

/// `choices[0].message.content`, trimmed; `None` when absent or blank.
pub fn extract_completion_text(envelope: &Value) -> Option<&str> {
    envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
