use std::convert::Infallible;

use serde_json::json;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::constants::{ERROR_METHOD_NOT_ALLOWED, ERROR_PROCESSING_FAILED};
use crate::error::RelayError;
use crate::http::json_response_with_status;

pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(relay_err) = rejection.find::<RelayError>() {
        let status = StatusCode::from_u16(relay_err.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Ok(json_response_with_status(&relay_err.to_json(), status));
    }

    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Endpoint not found")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, ERROR_METHOD_NOT_ALLOWED)
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header required")
    } else {
        log::error!("unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, ERROR_PROCESSING_FAILED)
    };

    let error_response = json!({
        "error": message,
        "status": status.as_u16()
    });

    Ok(json_response_with_status(&error_response, status))
}
