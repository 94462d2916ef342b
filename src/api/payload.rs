//! Order request bodies.
//!
//! `POST /api/orders` accepts JSON and URL-encoded forms. Both decode into a
//! `serde_json::Value` that goes through the same order validation.
//!
//! | Content type                        | Body        | Payload                 |
//! |-------------------------------------|-------------|-------------------------|
//! | `application/json`, `*/*+json`     | empty       | `null`                  |
//! | `application/json`, `*/*+json`     | JSON text   | parsed value            |
//! | `application/x-www-form-urlencoded` | `k=v&...`   | object, repeats → array |
//! | anything else or missing            | ignored     | `null`                  |

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use serde_json::{map::Entry, Map, Value};

use crate::http::response::ApiError;

/// Body of an order request, decoded by content type.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPayload(pub Value);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return BodyKind::Other;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

impl<S> FromRequest<S> for OrderPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(status = %rejection.status(), error = %rejection.body_text(), "Unreadable order body");
            ApiError::with_status(rejection.status(), rejection.body_text())
        })?;

        let value = match kind {
            BodyKind::Json if bytes.is_empty() => Value::Null,
            BodyKind::Json => decode_json(&bytes)?,
            BodyKind::Form => decode_form(&bytes)?,
            BodyKind::Other => Value::Null,
        };

        Ok(OrderPayload(value))
    }
}

fn decode_json(bytes: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(error = %e, "Malformed JSON order body");
        ApiError::with_status(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse the request body as JSON: {}", e),
        )
    })
}

/// Decode a URL-encoded form. A key seen once maps to a string, a repeated
/// key maps to an array of its values in order.
fn decode_form(bytes: &[u8]) -> Result<Value, ApiError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes).map_err(|e| {
        tracing::warn!(error = %e, "Malformed form order body");
        ApiError::with_status(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse the request body as a form: {}", e),
        )
    })?;

    let mut fields = Map::new();
    for (key, value) in pairs {
        match fields.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(Value::String(value));
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(values) => values.push(Value::String(value)),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, Value::String(value)]);
                }
            },
        }
    }

    Ok(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Value, ApiError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/api/orders");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();
        OrderPayload::from_request(req, &()).await.map(|p| p.0)
    }

    #[tokio::test]
    async fn test_json_body() {
        let value = extract(Some("application/json"), r#"{"customer":"Ada","items":["Naan"]}"#)
            .await
            .unwrap();
        assert_eq!(value, json!({"customer": "Ada", "items": ["Naan"]}));
    }

    #[tokio::test]
    async fn test_json_with_charset_and_suffix() {
        let value = extract(Some("application/json; charset=utf-8"), "{}").await.unwrap();
        assert_eq!(value, json!({}));

        let value = extract(Some("application/vnd.orders+json"), "[]").await.unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn test_empty_json_body_is_null() {
        let value = extract(Some("application/json"), "").await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = extract(Some("application/json"), "{\"customer\": ").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Failed to parse the request body as JSON"));
    }

    #[tokio::test]
    async fn test_form_repeated_keys_become_array() {
        let value = extract(
            Some("application/x-www-form-urlencoded"),
            "customer=Ada+Lovelace&items=Naan&items=Rice&items=Dal",
        )
        .await
        .unwrap();
        assert_eq!(
            value,
            json!({"customer": "Ada Lovelace", "items": ["Naan", "Rice", "Dal"]})
        );
    }

    #[tokio::test]
    async fn test_form_single_key_stays_string() {
        let value = extract(Some("application/x-www-form-urlencoded"), "customer=Ada&items=Naan")
            .await
            .unwrap();
        assert_eq!(value, json!({"customer": "Ada", "items": "Naan"}));
    }

    #[tokio::test]
    async fn test_other_content_types_are_null() {
        assert_eq!(extract(None, "customer=Ada").await.unwrap(), Value::Null);
        assert_eq!(extract(Some("text/plain"), "hello").await.unwrap(), Value::Null);
    }
}
