use serde_json::json;
use warp::Reply;
use warp::http::StatusCode;

use crate::error::RelayError;
use crate::server::handle_rejection;

#[test]
fn client_errors_omit_status_field() {
    let err = RelayError::bad_request("Note content cannot be empty");
    assert_eq!(
        err.to_json(),
        json!({ "error": "Note content cannot be empty" })
    );
}

#[test]
fn internal_errors_hide_cause() {
    let err = RelayError::internal("socket closed mid-body");
    assert_eq!(err.status_code, 500);
    assert_eq!(err.to_json(), json!({ "error": "Failed to process note with AI" }));
}

#[test]
fn display_includes_upstream_status() {
    let err = RelayError::upstream_status("Rate limit exceeded".to_string(), 429);
    assert_eq!(
        err.to_string(),
        "RelayError 502: Rate limit exceeded (upstream 429)"
    );
    assert_eq!(
        RelayError::method_not_allowed().to_string(),
        "RelayError 405: Method not allowed"
    );
}

#[tokio::test]
async fn rejection_uses_relay_error_status() {
    let cases = [
        (RelayError::method_not_allowed(), StatusCode::METHOD_NOT_ALLOWED),
        (RelayError::bad_request("bad"), StatusCode::BAD_REQUEST),
        (
            RelayError::misconfigured("Server misconfigured: missing OPENAI_API_KEY"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            RelayError::upstream_status("Invalid API key".to_string(), 401),
            StatusCode::BAD_GATEWAY,
        ),
    ];

    for (err, expected) in cases {
        let response = handle_rejection(warp::reject::custom(err))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), expected);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let response = handle_rejection(warp::reject::not_found())
        .await
        .unwrap()
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
}
