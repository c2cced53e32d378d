//! Axum extractors and response wrappers for the `{ "data": ... }` envelope
//!
//! Every request body and every successful response body wraps its payload
//! in a `data` member. [`Envelope`] unwraps incoming bodies and
//! [`DataResponse`] wraps outgoing ones.

use crate::core::error::{Fault, RequestError};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::Serialize;
use serde_json::Value;

/// Axum extractor yielding the `data` member of a JSON body
///
/// The body is decoded as JSON whatever its content type. An empty body, a
/// body that is not an object, or an object without `data` all yield
/// `Envelope(None)`; the validation chain decides whether that is an error.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(Envelope(data): Envelope) -> Result<Json<Value>, Fault> {
///     // data: Option<Value>
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope(pub Option<Value>);

impl Envelope {
    /// Decode raw body bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Fault> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope(None));
        }

        let body: Value = serde_json::from_slice(bytes).map_err(|e| RequestError::MalformedBody {
            message: e.to_string(),
        })?;

        Ok(Envelope(match body {
            Value::Object(mut members) => members.remove("data"),
            _ => None,
        }))
    }
}

impl<S> FromRequest<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = Fault;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RequestError::UnreadableBody {
                status: e.status(),
                message: e.body_text(),
            })?;

        Envelope::from_bytes(&bytes)
    }
}

/// Successful response body: `{ "data": <payload> }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
