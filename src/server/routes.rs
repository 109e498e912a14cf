use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use warp::Filter;
use warp::http::Method;

use crate::constants::{LOG_PREFIX_ERROR, LOG_PREFIX_SUCCESS, LOG_PREFIX_WARNING, PARSE_NOTE_PATH};
use crate::error::RelayError;
use crate::handlers;
use crate::http::json_response;
use crate::logging::{log_request, log_timed};
use crate::server::RelayServer;

pub fn create_routes(
    server: Arc<RelayServer>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let max_body_bytes = server.config.max_body_bytes;
    let with_server_state = warp::any().map(move || server.clone());

    let health_route = warp::path!("health")
        .and(warp::get())
        .and(with_server_state.clone())
        .map(|s: Arc<RelayServer>| json_response(&handlers::handle_health_check(&s.context())));

    let parse_note_route = warp::path!("api" / "parse-note")
        .and(method_and_body(max_body_bytes))
        .and(with_server_state.clone())
        .and_then(
            |method: Method, body: Bytes, s: Arc<RelayServer>| async move {
                let start_time = Instant::now();
                log_request(method.as_str(), PARSE_NOTE_PATH, body.len());

                let context = s.context();
                match handlers::handle_parse_note(&context, &method, &body).await {
                    Ok(result) => {
                        log_timed(LOG_PREFIX_SUCCESS, "parse-note", start_time);
                        Ok(json_response(&result))
                    }
                    Err(err) => {
                        log_timed(
                            outcome_prefix(&err),
                            &format!("parse-note: {}", err),
                            start_time,
                        );
                        Err(warp::reject::custom(err))
                    }
                }
            },
        );

    health_route.or(parse_note_route)
}

/// Server-side faults log as errors, upstream failures as warnings and
/// rejected client input at plain info.
pub(crate) fn outcome_prefix(err: &RelayError) -> &'static str {
    if err.is_internal() || err.is_misconfiguration() {
        LOG_PREFIX_ERROR
    } else if err.is_upstream_failure() {
        LOG_PREFIX_WARNING
    } else {
        ""
    }
}

/// POST bodies are read under the size limit. Other methods skip the body so
/// the handler can answer 405 instead of warp demanding a Content-Length.
fn method_and_body(
    limit: u64,
) -> impl Filter<Extract = (Method, Bytes), Error = warp::Rejection> + Clone {
    let post_body = warp::post()
        .and(warp::body::content_length_limit(limit))
        .and(warp::body::bytes())
        .map(|body: Bytes| (Method::POST, body));

    let other_methods = warp::method().and_then(|method: Method| async move {
        if method == Method::POST {
            Err(warp::reject::not_found())
        } else {
            Ok((method, Bytes::new()))
        }
    });

    post_body.or(other_methods).unify().untuple_one()
}
