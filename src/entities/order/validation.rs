//! Order-specific checks

use super::model::{Order, OrderStatus};
use crate::core::error::ValidationError;
use crate::core::validation::validators::{as_positive_integer, describe};
use crate::core::validation::{Check, Submission, check};
use serde_json::Value;

/// Check: `dishes` is an array with at least one line
pub fn dishes_array_non_empty() -> Check<Order> {
    check(|submission| match submission.field("dishes") {
        Some(Value::Array(lines)) if !lines.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidDishes.into()),
    })
}

/// Check: every line carries an integer `quantity` greater than zero.
///
/// The first offending line is reported by its zero-based index.
pub fn each_line_has_valid_quantity() -> Check<Order> {
    check(|submission| {
        let Some(lines) = submission.field("dishes").and_then(Value::as_array) else {
            return Ok(());
        };
        lines.iter().enumerate().try_for_each(|(index, line)| {
            let quantity = line.get("quantity");
            match quantity.and_then(as_positive_integer) {
                Some(_) => Ok(()),
                None => Err(ValidationError::InvalidQuantity {
                    index,
                    received: describe(quantity),
                }
                .into()),
            }
        })
    })
}

/// Check: `status` names one of the known order statuses
pub fn status_is_recognized() -> Check<Order> {
    check(|submission| {
        let status = submission.field("status");
        match status.and_then(Value::as_str) {
            Some(s) => s.parse::<OrderStatus>().map(|_| ()).map_err(Into::into),
            None => Err(ValidationError::InvalidStatus {
                received: describe(status),
            }
            .into()),
        }
    })
}

/// Check: the stored order has not been delivered yet
pub fn order_is_mutable() -> Check<Order> {
    check(|submission: &Submission<'_, Order>| match submission.stored() {
        Some(order) if order.status == OrderStatus::Delivered => {
            Err(ValidationError::OrderDelivered.into())
        }
        _ => Ok(()),
    })
}

/// Check: the stored order is still pending
pub fn order_is_deletable() -> Check<Order> {
    check(|submission: &Submission<'_, Order>| match submission.stored() {
        Some(order) if order.status != OrderStatus::Pending => {
            Err(ValidationError::OrderNotPending {
                status: order.status.to_string(),
            }
            .into())
        }
        _ => Ok(()),
    })
}
