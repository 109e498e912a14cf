use serde_json::{Value, json};

use crate::VERSION;
use crate::handlers::RelayContext;
use crate::http::CompletionBackend;

/// Liveness only; the completion API is not contacted.
pub fn handle_health_check<B: CompletionBackend>(context: &RelayContext<'_, B>) -> Value {
    if context.api_key.is_none() {
        log::debug!("health check: OPENAI_API_KEY is not configured");
    }

    json!({
        "status": "ok",
        "version": VERSION,
        "model": context.model,
        "upstream_configured": context.api_key.is_some(),
    })
}
