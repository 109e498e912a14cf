use clap::Parser;

use crate::constants::{DEFAULT_MAX_BODY_BYTES, DEFAULT_MODEL, DEFAULT_UPSTREAM_URL};

#[derive(Parser, Debug, Clone)]
#[command(name = "note-relay")]
#[command(about = "relay turning brief notes into structured permanent notes via a completion api")]
pub struct Config {
    #[arg(long, default_value = "0.0.0.0:3000", help = "server listen address")]
    pub listen: String,

    #[arg(
        long,
        default_value = DEFAULT_UPSTREAM_URL,
        help = "chat completions endpoint url"
    )]
    pub upstream_url: String,

    #[arg(long, default_value = DEFAULT_MODEL, help = "model identifier sent upstream")]
    pub model: String,

    #[arg(
        long,
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        help = "bearer token for the completion api"
    )]
    pub api_key: Option<String>,

    #[arg(
        long,
        default_value = "info",
        help = "log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    #[arg(
        long,
        default_value = "120",
        help = "overall timeout for the upstream call in seconds"
    )]
    pub request_timeout_seconds: u64,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_BODY_BYTES,
        help = "maximum accepted request body size in bytes"
    )]
    pub max_body_bytes: u64,
}

impl Config {
    /// API key, treating a blank value the same as an unset one.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

pub fn validate_config(config: &Config) -> Result<(), String> {
    if config.listen.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid listen address: {}", config.listen));
    }
    if !config.upstream_url.starts_with("http://") && !config.upstream_url.starts_with("https://")
    {
        return Err(format!(
            "invalid upstream URL (must start with http:// or https://): {}",
            config.upstream_url
        ));
    }
    if let Err(e) = url::Url::parse(&config.upstream_url) {
        return Err(format!("invalid upstream URL format: {}", e));
    }
    if config.model.trim().is_empty() {
        return Err("model identifier cannot be empty".to_string());
    }
    if config.request_timeout_seconds == 0 {
        return Err("request timeout must be at least one second".to_string());
    }
    if config.max_body_bytes == 0 {
        return Err("max body size must be greater than zero".to_string());
    }
    Ok(())
}
