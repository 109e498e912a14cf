use std::future::Future;
use std::time::Duration;

use crate::constants::CONTENT_TYPE_JSON;
use crate::error::RelayError;
use crate::http::error::map_reqwest_error;
use crate::http::request::ChatCompletionRequest;

/// Raw answer from the completion API, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to issue one chat-completions call.
///
/// Transport failures come back as `Err`; any HTTP answer, including non-2xx,
/// comes back as `Ok` so the handler owns status mapping.
pub trait CompletionBackend: Send + Sync {
    fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> impl Future<Output = Result<UpstreamReply, RelayError>> + Send;
}

pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpBackend {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CompletionBackend for HttpBackend {
    async fn complete(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<UpstreamReply, RelayError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();

        // an unreadable error body is treated as empty; the status alone is mapped
        let body = match response.text().await {
            Ok(text) => text,
            Err(err) if !status.is_success() => {
                log::warn!("failed to read upstream error body ({}): {}", status, err);
                String::new()
            }
            Err(err) => return Err(map_reqwest_error(err)),
        };

        Ok(UpstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}
