use crate::error::RelayError;

pub fn map_reqwest_error(err: reqwest::Error) -> RelayError {
    let cause = if err.is_connect() {
        format!("completion API unreachable: {}", err)
    } else if err.is_timeout() {
        format!("completion API timed out: {}", err)
    } else if err.is_decode() || err.is_body() {
        format!("failed to read completion API response: {}", err)
    } else {
        format!("completion API request failed: {}", err)
    };
    RelayError::internal(&cause)
}
