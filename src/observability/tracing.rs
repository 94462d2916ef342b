//! Per-request tracing spans.

use axum::{body::Body, http::Request};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

use crate::http::request::X_REQUEST_ID;

type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Access-log layer: one span per request, one event per response.
pub fn http_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(make_request_span as MakeRequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn make_request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    )
}
