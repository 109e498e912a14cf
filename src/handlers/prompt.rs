use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::constants::{
    DEFAULT_MAX_LENGTH, DEFAULT_PROMPT_TEMPLATE, ERROR_EMPTY_NOTE, ERROR_NOTE_TOO_LONG,
    MAX_NOTE_LENGTH, MAX_UPSTREAM_TOKENS, NOTE_PLACEHOLDER,
};
use crate::error::RelayError;

/// Inbound body of `POST /api/parse-note`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    #[serde(default)]
    pub note_content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub settings: Option<PromptSettingsInput>,
}

/// Client-supplied prompt settings, every field optional. A field of the
/// wrong type is dropped and its default applies.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptSettingsInput {
    #[serde(default, deserialize_with = "lenient")]
    pub template: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub include_term_explanations: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_length: Option<f64>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::debug!("ignoring malformed prompt setting: {}", e);
            Ok(None)
        }
    }
}

/// Settings after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSettings<'a> {
    pub template: Cow<'a, str>,
    pub include_term_explanations: bool,
    pub max_length: u32,
}

impl<'a> PromptSettings<'a> {
    /// An empty template, or a max length below one token, falls back to the default.
    /// Fractional lengths are truncated and huge ones saturate before the clamp.
    pub fn resolve(input: Option<&'a PromptSettingsInput>) -> Self {
        let template = input
            .and_then(|s| s.template.as_deref())
            .filter(|t| !t.is_empty())
            .map(Cow::Borrowed)
            .unwrap_or(Cow::Borrowed(DEFAULT_PROMPT_TEMPLATE));

        let include_term_explanations = input
            .and_then(|s| s.include_term_explanations)
            .unwrap_or(true);

        let max_length = input
            .and_then(|s| s.max_length)
            .filter(|len| *len >= 1.0)
            .map(|len| len as u32)
            .unwrap_or(DEFAULT_MAX_LENGTH);

        Self {
            template,
            include_term_explanations,
            max_length,
        }
    }

    pub fn token_cap(&self) -> u32 {
        self.max_length.min(MAX_UPSTREAM_TOKENS)
    }

    pub fn render(&self, note: &str) -> String {
        render_prompt(&self.template, note)
    }
}

/// Substitutes the first `{noteContent}` only; later occurrences stay literal.
/// The note is inserted raw.
pub fn render_prompt(template: &str, note: &str) -> String {
    template.replacen(NOTE_PLACEHOLDER, note, 1)
}

/// Returns the note untouched when it is non-blank and within the size limit.
/// Length is measured in UTF-16 code units, as browser clients count it.
pub fn validate_note(note: Option<&str>) -> Result<&str, RelayError> {
    let note = match note {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(RelayError::bad_request(ERROR_EMPTY_NOTE)),
    };

    if note.encode_utf16().count() > MAX_NOTE_LENGTH {
        return Err(RelayError::bad_request(ERROR_NOTE_TOO_LONG));
    }

    Ok(note)
}
