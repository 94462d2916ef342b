//! Request identification.
//!
//! # Responsibilities
//! - Give every request an `x-request-id` (UUID v4) unless the client sent one
//! - Echo the ID on the response so clients can correlate logs
//!
//! # Design Decisions
//! - Request ID added as early as possible so every span can carry it

use axum::http::{HeaderName, HeaderValue, Request};
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Layer stack that sets the request ID and copies it onto the response.
pub type RequestIdLayer =
    Stack<PropagateRequestIdLayer, Stack<SetRequestIdLayer<MakeRequestUuid>, Identity>>;

/// Build the request ID layers, outermost first.
pub fn request_id_layer() -> ServiceBuilder<RequestIdLayer> {
    let header = HeaderName::from_static(X_REQUEST_ID);
    ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(header.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(header))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let req = Request::builder().body(()).unwrap();
        let mut maker = MakeRequestUuid;

        let first = maker.make_request_id(&req).unwrap();
        let second = maker.make_request_id(&req).unwrap();

        let first = first.header_value().to_str().unwrap().to_string();
        let second = second.header_value().to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second);
    }
}
