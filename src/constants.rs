/// Upstream completion API defaults
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const UPSTREAM_TEMPERATURE: f64 = 0.2;

/// Inbound endpoint
pub const PARSE_NOTE_PATH: &str = "/api/parse-note";

/// Note and token limits; note length is in UTF-16 code units
pub const MAX_NOTE_LENGTH: usize = 10_000;
pub const DEFAULT_MAX_LENGTH: u32 = 2000;
pub const MAX_UPSTREAM_TOKENS: u32 = 4000;

/// Prompt templating
pub const NOTE_PLACEHOLDER: &str = "{noteContent}";

pub const DEFAULT_PROMPT_TEMPLATE: &str =
    "Transform the following brief note into a comprehensive educational permanent note:\n\n{noteContent}";

pub const SYSTEM_INSTRUCTION: &str = r#"You are a helpful assistant that transforms brief notes into comprehensive, educational permanent notes.

CRITICAL: You MUST respond with valid JSON in this exact format:
{
  "title": "A concise, descriptive title for the note",
  "content": "The comprehensive, well-structured permanent note content",
  "keywords": ["keyword1", "keyword2", "keyword3"]
}

Requirements:
- title: Short, clear title (5-10 words max)
- content: Full transformed note with depth and clarity
- keywords: 3-7 relevant keywords for categorization
- ONLY return valid JSON, no additional text or markdown
- Focus on clarity, depth, and educational value
- IMPORTANT: DO NOT extrapolate or add information beyond what's in the original note."#;

/// Response headers
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const HEADER_CACHE_CONTROL: &str = "no-store";
pub const HEADER_ACCESS_CONTROL_ALLOW_ORIGIN: &str = "*";
pub const HEADER_ACCESS_CONTROL_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const HEADER_ACCESS_CONTROL_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Error messages returned to clients
pub const ERROR_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const ERROR_EMPTY_NOTE: &str = "Note content cannot be empty";
pub const ERROR_NOTE_TOO_LONG: &str = "Note content is too long (max 10,000 characters)";
pub const ERROR_MISSING_API_KEY: &str = "Server misconfigured: missing OPENAI_API_KEY";
pub const ERROR_INVALID_API_KEY: &str = "Invalid API key";
pub const ERROR_RATE_LIMITED: &str = "Rate limit exceeded";
pub const ERROR_UPSTREAM_UNAVAILABLE: &str = "OpenAI service unavailable";
pub const ERROR_EMPTY_COMPLETION: &str = "Empty response from AI";
pub const ERROR_INVALID_COMPLETION_JSON: &str = "AI did not return valid JSON";
pub const ERROR_PROCESSING_FAILED: &str = "Failed to process note with AI";

/// Logging prefixes
pub const LOG_PREFIX_SUCCESS: &str = "✅";
pub const LOG_PREFIX_ERROR: &str = "❌";
pub const LOG_PREFIX_WARNING: &str = "⚠️";

/// Maximum accepted inbound body size (bytes)
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024;
