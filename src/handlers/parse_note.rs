use serde_json::Value;
use warp::http::Method;

use crate::constants::ERROR_MISSING_API_KEY;
use crate::error::RelayError;
use crate::handlers::RelayContext;
use crate::handlers::prompt::{NoteRequest, PromptSettings, validate_note};
use crate::handlers::upstream::interpret_reply;
use crate::http::{ChatCompletionRequest, CompletionBackend};
use crate::logging::{LogConfig, log_handler_io};

/// Runs one note through validate, prompt, upstream call and reply interpretation.
///
/// Every stage is terminal on failure and nothing is retried.
pub async fn handle_parse_note<B: CompletionBackend>(
    context: &RelayContext<'_, B>,
    method: &Method,
    body: &[u8],
) -> Result<Value, RelayError> {
    if method != Method::POST {
        return Err(RelayError::method_not_allowed());
    }

    let request: NoteRequest = serde_json::from_slice(body)
        .map_err(|e| RelayError::internal(&format!("invalid request body: {}", e)))?;

    let note = validate_note(request.note_content.as_deref())?;
    let settings = PromptSettings::resolve(request.settings.as_ref());
    let user_prompt = settings.render(note);

    let api_key = context
        .api_key
        .ok_or_else(|| RelayError::misconfigured(ERROR_MISSING_API_KEY))?;

    let upstream_request =
        ChatCompletionRequest::for_prompt(context.model, &user_prompt, settings.token_cap());

    if LogConfig::get().debug_enabled {
        log::debug!(
            "prompt settings: max_length={} token_cap={} include_term_explanations={}",
            settings.max_length,
            settings.token_cap(),
            settings.include_term_explanations
        );
        log_handler_io(
            "parse-note",
            serde_json::to_value(&upstream_request).ok().as_ref(),
            None,
        );
    }

    let reply = context.backend.complete(api_key, &upstream_request).await?;
    let result = interpret_reply(&reply)?;

    log_handler_io("parse-note", None, Some(&result));
    Ok(result)
}
