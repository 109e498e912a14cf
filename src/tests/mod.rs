mod error_tests;
mod prompt_tests;

use std::sync::Mutex;

use serde_json::{Value, json};

use crate::error::RelayError;
use crate::handlers::RelayContext;
use crate::http::{ChatCompletionRequest, CompletionBackend, UpstreamReply};

pub const TEST_API_KEY: &str = "sk-test";
pub const TEST_MODEL: &str = "gpt-4o-mini";

pub struct RecordedCall {
    pub api_key: String,
    pub body: Value,
}

/// Answers every call with the same canned reply and records what was sent.
pub struct MockBackend {
    reply: Result<UpstreamReply, RelayError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(UpstreamReply {
                status,
                body: body.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 200 reply whose first choice carries `content` as its message text.
    pub fn with_completion(content: &str) -> Self {
        let envelope = json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }
            ]
        });
        Self::replying(200, &envelope.to_string())
    }

    pub fn failing(error: RelayError) -> Self {
        Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_body(&self) -> Value {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|call| call.body.clone())
            .expect("backend was never called")
    }

    pub fn last_api_key(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|call| call.api_key.clone())
            .expect("backend was never called")
    }
}

impl CompletionBackend for MockBackend {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<UpstreamReply, RelayError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            body: serde_json::to_value(request).unwrap(),
        });
        self.reply.clone()
    }
}

pub fn test_context(backend: &MockBackend) -> RelayContext<'_, MockBackend> {
    RelayContext {
        backend,
        api_key: Some(TEST_API_KEY),
        model: TEST_MODEL,
    }
}
