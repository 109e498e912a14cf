pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::{CompletionBackend, HttpBackend, UpstreamReply};
pub use request::ChatCompletionRequest;
pub use response::{json_response, json_response_with_status};
