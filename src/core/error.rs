//! Typed faults for the grubdash API
//!
//! Every handler returns `Result<_, Fault>`. A fault carries enough structure
//! to pick an HTTP status and a client-facing message; it is rendered at the
//! boundary as `{ "error": "<message>" }`.
//!
//! # Fault Categories
//!
//! - [`ValidationError`]: the submitted payload or the stored entity's state
//!   rejects the operation (400)
//! - [`EntityError`]: the referenced entity is absent (404)
//! - [`RequestError`]: routing and body failures (404, 405, 400, 413)
//! - [`Fault::Internal`]: anything unexpected (500, message hidden)
//!
//! # Example
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! match service.read("42").await {
//!     Ok(dish) => println!("{}", dish.name),
//!     Err(Fault::Entity(EntityError::NotFound { id, .. })) => println!("no dish {}", id),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Message sent to clients for every internal fault.
pub const INTERNAL_MESSAGE: &str = "Something went wrong!";

/// The error type returned by every grubdash operation
#[derive(Debug)]
pub enum Fault {
    /// Payload or state validation failed
    Validation(ValidationError),

    /// Entity lookup failed
    Entity(EntityError),

    /// Routing or body-decoding failure
    Request(RequestError),

    /// Unexpected failure; the detail is logged, never sent
    Internal(String),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Validation(e) => write!(f, "{}", e),
            Fault::Entity(e) => write!(f, "{}", e),
            Fault::Request(e) => write!(f, "{}", e),
            Fault::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Fault::Validation(e) => Some(e),
            Fault::Entity(e) => Some(e),
            Fault::Request(e) => Some(e),
            Fault::Internal(_) => None,
        }
    }
}

/// Error body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Fault {
    /// Get the HTTP status code for this fault
    pub fn status_code(&self) -> StatusCode {
        match self {
            Fault::Validation(_) => StatusCode::BAD_REQUEST,
            Fault::Entity(e) => e.status_code(),
            Fault::Request(e) => e.status_code(),
            Fault::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a stable code for programmatic handling and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Fault::Validation(e) => e.error_code(),
            Fault::Entity(e) => e.error_code(),
            Fault::Request(e) => e.error_code(),
            Fault::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message exposed to clients
    pub fn client_message(&self) -> String {
        match self {
            Fault::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.client_message(),
        }
    }
}

impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

impl From<anyhow::Error> for Fault {
    fn from(err: anyhow::Error) -> Self {
        Fault::Internal(format!("{:#}", err))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Rejections produced by the validation chains
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The request body has no `data` member
    MissingData,

    /// A required field is missing, falsy or blank
    MissingField {
        entity: &'static str,
        field: String,
    },

    /// `price` is not a positive integer
    InvalidPrice {
        received: String,
    },

    /// `dishes` is not a non-empty array
    InvalidDishes,

    /// An order line has a missing or non-positive-integer quantity
    InvalidQuantity {
        index: usize,
        received: String,
    },

    /// `status` is outside the order status enumeration
    InvalidStatus {
        received: String,
    },

    /// The body id disagrees with the route id
    IdMismatch {
        entity: &'static str,
        body_id: String,
        route_id: String,
    },

    /// The stored order was already delivered
    OrderDelivered,

    /// The stored order is not pending and cannot be deleted
    OrderNotPending {
        status: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingData => {
                write!(f, "Request body must include 'data'.")
            }
            ValidationError::MissingField { entity, field } => {
                write!(f, "{} must include a '{}'", entity, field)
            }
            ValidationError::InvalidPrice { received } => {
                write!(f, "'price' requires a valid number, but was: {}", received)
            }
            ValidationError::InvalidDishes => {
                write!(
                    f,
                    "Property 'dishes' must be an array containing 1 or more dishes."
                )
            }
            ValidationError::InvalidQuantity { index, received } => {
                write!(
                    f,
                    "Dish {} must have a quantity that is an integer greater than 0. Received: {}",
                    index, received
                )
            }
            ValidationError::InvalidStatus { received } => {
                write!(
                    f,
                    "Value of the 'status' property must be one of pending, preparing, out-for-delivery, delivered. Received: {}.",
                    received
                )
            }
            ValidationError::IdMismatch {
                entity,
                body_id,
                route_id,
            } => {
                write!(
                    f,
                    "{} id does not match route id. {}: {}, Route: {}",
                    entity, entity, body_id, route_id
                )
            }
            ValidationError::OrderDelivered => {
                write!(f, "A delivered order cannot be changed")
            }
            ValidationError::OrderNotPending { status } => {
                write!(
                    f,
                    "An order cannot be deleted unless it is 'pending'. Received: status={}",
                    status
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingData => "MISSING_DATA",
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::InvalidPrice { .. } => "INVALID_PRICE",
            ValidationError::InvalidDishes => "INVALID_DISHES",
            ValidationError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            ValidationError::InvalidStatus { .. } => "INVALID_STATUS",
            ValidationError::IdMismatch { .. } => "ID_MISMATCH",
            ValidationError::OrderDelivered => "ORDER_DELIVERED",
            ValidationError::OrderNotPending { .. } => "ORDER_NOT_PENDING",
        }
    }
}

impl From<ValidationError> for Fault {
    fn from(err: ValidationError) -> Self {
        Fault::Validation(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookup
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    /// No entity is stored under the route id
    NotFound { entity: &'static str, id: String },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity, id } => {
                write!(f, "{} does not exist: {}", entity, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for Fault {
    fn from(err: EntityError) -> Self {
        Fault::Entity(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors raised before a request reaches a resource handler
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The path exists but does not accept this verb
    MethodNotAllowed { method: String, path: String },

    /// No route matches the path
    RouteNotFound { path: String },

    /// The body could not be decoded as JSON
    MalformedBody { message: String },

    /// The body could not be read at all, e.g. it exceeds the size limit
    UnreadableBody { status: StatusCode, message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
            RequestError::RouteNotFound { path } => {
                write!(f, "Path not found: {}", path)
            }
            RequestError::MalformedBody { message } => {
                write!(f, "Request body is not valid JSON: {}", message)
            }
            RequestError::UnreadableBody { message, .. } => {
                write!(f, "Request body could not be read: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::UnreadableBody { status, .. } => *status,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::MalformedBody { .. } => "MALFORMED_BODY",
            RequestError::UnreadableBody { .. } => "UNREADABLE_BODY",
        }
    }
}

impl From<RequestError> for Fault {
    fn from(err: RequestError) -> Self {
        Fault::Request(err)
    }
}
