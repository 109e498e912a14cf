use crate::http::CompletionBackend;

/// Read-only inputs a single request needs besides its own method and body.
pub struct RelayContext<'a, B: CompletionBackend> {
    pub backend: &'a B,
    pub api_key: Option<&'a str>,
    pub model: &'a str,
}

impl<'a, B: CompletionBackend> Clone for RelayContext<'a, B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend,
            api_key: self.api_key,
            model: self.model,
        }
    }
}
