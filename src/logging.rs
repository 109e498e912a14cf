use std::sync::OnceLock;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::constants::{LOG_PREFIX_ERROR, LOG_PREFIX_SUCCESS, LOG_PREFIX_WARNING};

pub struct LogConfig {
    pub debug_enabled: bool,
}

static LOG_CONFIG: OnceLock<LogConfig> = OnceLock::new();

impl LogConfig {
    pub fn init(debug: bool) {
        LOG_CONFIG.get_or_init(|| LogConfig {
            debug_enabled: debug,
        });
    }

    pub fn get() -> &'static LogConfig {
        LOG_CONFIG.get().unwrap_or_else(|| {
            static FALLBACK: LogConfig = LogConfig {
                debug_enabled: false,
            };
            &FALLBACK
        })
    }
}

/// Logs an inbound request line. Only the body size is logged, never the note text.
pub fn log_request(method: &str, path: &str, body_bytes: usize) {
    log::info!(
        "{} {} ({} bytes)",
        sanitize_log_message(method),
        sanitize_log_message(path),
        body_bytes
    );
}

/// Logs how a request ended, picking the level from the outcome.
pub fn log_timed(prefix: &str, operation: &str, start: Instant) {
    let formatted_duration = format_duration(start.elapsed());

    match prefix {
        LOG_PREFIX_SUCCESS => log::info!("{} {} | {}", prefix, operation, formatted_duration),
        LOG_PREFIX_ERROR => log::error!("{} {} | {}", prefix, operation, formatted_duration),
        LOG_PREFIX_WARNING => log::warn!("{} {} | {}", prefix, operation, formatted_duration),
        _ => log::info!("{} | {}", operation, formatted_duration),
    }
}

pub fn format_duration(duration: Duration) -> String {
    let total_nanos = duration.as_nanos();

    if total_nanos < 1_000_000 {
        format!("{:.1}µs", total_nanos as f64 / 1_000.0)
    } else if total_nanos < 1_000_000_000 {
        format!("{:.2}ms", total_nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", total_nanos as f64 / 1_000_000_000.0)
    }
}

pub fn sanitize_log_message(message: &str) -> String {
    message
        .chars()
        .map(|c| {
            if c.is_control() && !matches!(c, '\t' | '\n' | '\r') {
                '?'
            } else {
                c
            }
        })
        .collect()
}

/// Dumps the upstream payload and the relayed result when debug logging is on.
pub fn log_handler_io(endpoint: &str, upstream_request: Option<&Value>, result: Option<&Value>) {
    if !LogConfig::get().debug_enabled {
        return;
    }

    if let Some(request_value) = upstream_request {
        log::debug!(
            "{} upstream request: {}",
            endpoint,
            sanitize_log_message(&serde_json::to_string_pretty(request_value).unwrap_or_default())
        );
    }

    if let Some(result_value) = result {
        log::debug!(
            "{} result: {}",
            endpoint,
            sanitize_log_message(&serde_json::to_string_pretty(result_value).unwrap_or_default())
        );
    }
}
