use serde::Serialize;

use crate::constants::{SYSTEM_INSTRUCTION, UPSTREAM_TEMPERATURE};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Body of the single chat-completions call made per note.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Two-message conversation: the fixed system instruction, then the rendered prompt.
    pub fn for_prompt(model: &'a str, user_prompt: &'a str, max_tokens: u32) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens,
            temperature: UPSTREAM_TEMPERATURE,
        }
    }
}
