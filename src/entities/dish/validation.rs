//! Dish-specific checks

use super::model::Dish;
use crate::core::error::ValidationError;
use crate::core::validation::validators::{as_positive_integer, describe};
use crate::core::validation::{Check, check};

/// Check: `price` is an integer greater than zero
pub fn positive_integer_price() -> Check<Dish> {
    check(|submission| {
        let price = submission.field("price");
        if price.and_then(as_positive_integer).is_some() {
            Ok(())
        } else {
            Err(ValidationError::InvalidPrice {
                received: describe(price),
            }
            .into())
        }
    })
}
