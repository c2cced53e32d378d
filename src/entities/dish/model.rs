//! Dish entity model

use super::validation::positive_integer_price;
use crate::core::entity::{Entity, Resource};
use crate::core::error::{Fault, ValidationError};
use crate::core::validation::ValidationChain;
use crate::core::validation::validators::{
    as_positive_integer, as_text, describe, entity_exists, required, required_text,
    route_id_matches_body_id,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu. Dishes can be created and replaced but never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn display_name() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Field checks shared by create and update, in reporting order
fn field_checks(chain: ValidationChain<Dish>) -> ValidationChain<Dish> {
    chain
        .then(required_text("name"))
        .then(required_text("description"))
        .then(required("price"))
        .then(required_text("image_url"))
        .then(positive_integer_price())
}

impl Resource for Dish {
    fn create_checks() -> ValidationChain<Self> {
        field_checks(ValidationChain::new())
    }

    fn update_checks() -> ValidationChain<Self> {
        field_checks(
            ValidationChain::new()
                .then(entity_exists())
                .then(route_id_matches_body_id()),
        )
    }

    fn from_payload(id: String, data: &Value) -> Result<Self, Fault> {
        Ok(Dish {
            id,
            name: text(data, "name")?,
            description: text(data, "description")?,
            price: price(data)?,
            image_url: text(data, "image_url")?,
        })
    }

    fn replaced_by(&self, data: &Value) -> Result<Self, Fault> {
        Self::from_payload(self.id.clone(), data)
    }
}

fn text(data: &Value, field: &str) -> Result<String, Fault> {
    data.get(field)
        .and_then(as_text)
        .map(str::to_string)
        .ok_or_else(|| {
            ValidationError::MissingField {
                entity: Dish::display_name(),
                field: field.to_string(),
            }
            .into()
        })
}

fn price(data: &Value) -> Result<u64, Fault> {
    let price = data.get("price");
    price.and_then(as_positive_integer).ok_or_else(|| {
        ValidationError::InvalidPrice {
            received: describe(price),
        }
        .into()
    })
}
