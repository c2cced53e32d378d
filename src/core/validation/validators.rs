//! Reusable checks shared by every resource
//!
//! Payloads arrive as raw JSON so that a wrong type, a blank string and a
//! missing member can all be reported with the same message a client
//! expects. The helpers at the top of this module interpret JSON values;
//! the check factories below them build [`Check`]s from those helpers.

use super::chain::{Check, check};
use crate::core::entity::Entity;
use crate::core::error::{EntityError, Fault, ValidationError};
use serde_json::Value;

/// Whether a JSON value counts as "supplied": `null`, `false`, `0` and the
/// empty string do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 2^64, the first float past `u64::MAX`
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A float holding a whole number
fn whole(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
}

/// Read a JSON value as an integer strictly greater than zero.
///
/// Covers the whole `u64` range; larger values are `None`.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    if value.is_u64() {
        return value.as_u64().filter(|u| *u > 0);
    }
    if value.is_i64() {
        return None;
    }
    whole(value)
        .filter(|f| *f >= 1.0 && *f < U64_LIMIT)
        .map(|f| f as u64)
}

/// A non-blank string member
pub fn as_text(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

/// Render a possibly-missing value for a client message
pub fn describe(value: Option<&Value>) -> String {
    match value {
        None => "missing".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn missing_field<T: Entity>(field: &str) -> Fault {
    ValidationError::MissingField {
        entity: T::display_name(),
        field: field.to_string(),
    }
    .into()
}

/// Check: the body carried a non-null `data` member
pub fn data_is_defined<T: Entity>() -> Check<T> {
    check(|submission| match submission.data() {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingData.into()),
    })
}

/// Check: `field` is supplied at all (see [`is_truthy`])
pub fn required<T: Entity>(field: &'static str) -> Check<T> {
    check(move |submission| {
        if submission.field(field).is_some_and(is_truthy) {
            Ok(())
        } else {
            Err(missing_field::<T>(field))
        }
    })
}

/// Check: `field` is a string that is not blank after trimming
pub fn required_text<T: Entity>(field: &'static str) -> Check<T> {
    check(move |submission| {
        if submission.field(field).and_then(as_text).is_some() {
            Ok(())
        } else {
            Err(missing_field::<T>(field))
        }
    })
}

/// Check: a body id, when supplied, equals the route id.
///
/// A missing, `null`, empty or otherwise falsy body id is accepted; the
/// route id wins.
pub fn route_id_matches_body_id<T: Entity>() -> Check<T> {
    check(|submission| {
        let Some(route_id) = submission.route_id() else {
            return Ok(());
        };
        match submission.field("id") {
            Some(id) if is_truthy(id) && id.as_str() != Some(route_id) => {
                Err(ValidationError::IdMismatch {
                    entity: T::display_name(),
                    body_id: describe(Some(id)),
                    route_id: route_id.to_string(),
                }
                .into())
            }
            _ => Ok(()),
        }
    })
}

/// Check: an entity is stored under the route id
pub fn entity_exists<T: Entity>() -> Check<T> {
    check(|submission| {
        if submission.stored().is_some() {
            return Ok(());
        }
        Err(EntityError::NotFound {
            entity: T::display_name(),
            id: submission.route_id().unwrap_or_default().to_string(),
        }
        .into())
    })
}
