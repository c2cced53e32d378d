//! Order entity model

use super::validation::{
    dishes_array_non_empty, each_line_has_valid_quantity, order_is_deletable, order_is_mutable,
    status_is_recognized,
};
use crate::core::entity::{Entity, Removable, Resource};
use crate::core::error::{Fault, ValidationError};
use crate::core::validation::ValidationChain;
use crate::core::validation::validators::{
    as_positive_integer, as_text, describe, data_is_defined, entity_exists, required,
    required_text, route_id_matches_body_id,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of an order.
///
/// Every transition is client-driven through update; the only hard rules are
/// that a delivered order accepts no further update and that only a pending
/// order can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStatus {
                received: s.to_string(),
            })
    }
}

/// One dish in an order: a quantity plus whatever describes the dish.
///
/// Apart from `quantity`, members are kept exactly as submitted. `id` refers
/// to a dish but is not checked against the dish collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(flatten)]
    pub details: Map<String, Value>,
    pub quantity: u64,
}

impl OrderLine {
    /// Copy a submitted line; only `quantity` is required to be valid
    fn from_value(index: usize, line: &Value) -> Result<Self, Fault> {
        let quantity = line.get("quantity");
        let invalid = || ValidationError::InvalidQuantity {
            index,
            received: describe(quantity),
        };
        let quantity = quantity.and_then(as_positive_integer).ok_or_else(invalid)?;
        let Value::Object(members) = line else {
            return Err(invalid().into());
        };

        let mut details = members.clone();
        details.remove("quantity");
        Ok(OrderLine { details, quantity })
    }
}

/// A customer's order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn display_name() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Order {
    fn create_checks() -> ValidationChain<Self> {
        ValidationChain::new()
            .then(data_is_defined())
            .then(required_text("deliverTo"))
            .then(required_text("mobileNumber"))
            .then(required("dishes"))
            .then(dishes_array_non_empty())
            .then(each_line_has_valid_quantity())
    }

    fn update_checks() -> ValidationChain<Self> {
        ValidationChain::new()
            .then(entity_exists())
            .then(route_id_matches_body_id())
            .then(order_is_mutable())
            .then(required_text("deliverTo"))
            .then(required_text("mobileNumber"))
            .then(required("status"))
            .then(required("dishes"))
            .then(status_is_recognized())
            .then(dishes_array_non_empty())
            .then(each_line_has_valid_quantity())
    }

    /// New orders always start pending, whatever status the client sent
    fn from_payload(id: String, data: &Value) -> Result<Self, Fault> {
        Ok(Order {
            id,
            deliver_to: text(data, "deliverTo")?,
            mobile_number: text(data, "mobileNumber")?,
            status: OrderStatus::Pending,
            dishes: lines(data)?,
        })
    }

    fn replaced_by(&self, data: &Value) -> Result<Self, Fault> {
        let status = data
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .parse::<OrderStatus>()?;

        Ok(Order {
            id: self.id.clone(),
            deliver_to: text(data, "deliverTo")?,
            mobile_number: text(data, "mobileNumber")?,
            status,
            dishes: lines(data)?,
        })
    }
}

impl Removable for Order {
    fn delete_checks() -> ValidationChain<Self> {
        ValidationChain::new()
            .then(entity_exists())
            .then(order_is_deletable())
    }
}

fn text(data: &Value, field: &str) -> Result<String, Fault> {
    data.get(field)
        .and_then(as_text)
        .map(str::to_string)
        .ok_or_else(|| {
            ValidationError::MissingField {
                entity: Order::display_name(),
                field: field.to_string(),
            }
            .into()
        })
}

fn lines(data: &Value) -> Result<Vec<OrderLine>, Fault> {
    let lines = data
        .get("dishes")
        .and_then(Value::as_array)
        .filter(|lines| !lines.is_empty())
        .ok_or(ValidationError::InvalidDishes)?;

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| OrderLine::from_value(index, line))
        .collect()
}
