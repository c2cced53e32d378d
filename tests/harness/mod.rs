//! Shared setup for the HTTP integration tests
//!
//! Each test gets a fresh pair of stores. Fixtures are inserted straight
//! into the stores and results can be inspected there, bypassing HTTP.

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

pub struct TestApp {
    pub server: TestServer,
    pub dishes: InMemoryStore<Dish>,
    pub orders: InMemoryStore<Order>,
}

impl TestApp {
    pub fn new() -> Self {
        let dishes = InMemoryStore::<Dish>::new();
        let orders = InMemoryStore::<Order>::new();

        let app = ServerBuilder::new()
            .with_dish_repository(dishes.clone())
            .with_order_repository(orders.clone())
            .with_id_generator(SequentialIdGenerator::starting_at(1000))
            .build()
            .expect("Failed to build router");

        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            dishes,
            orders,
        }
    }

    pub async fn insert_dish(&self, dish: Dish) {
        self.dishes.insert(dish).await.expect("insert dish fixture");
    }

    pub async fn insert_order(&self, order: Order) {
        self.orders.insert(order).await.expect("insert order fixture");
    }

    pub async fn stored_dish(&self, id: &str) -> Option<Dish> {
        self.dishes.get(id).await.expect("read dish store")
    }

    pub async fn stored_order(&self, id: &str) -> Option<Order> {
        self.orders.get(id).await.expect("read order store")
    }
}

/// A dish body without an id
pub fn dish_json(name: &str) -> Value {
    json!({
        "name": name,
        "description": "A warm bagel filled with falafel and tahini",
        "price": 6,
        "image_url": "some-valid-url"
    })
}

pub fn dish(id: &str, name: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: "A warm bagel filled with falafel and tahini".to_string(),
        price: 6,
        image_url: "some-valid-url".to_string(),
    }
}

pub fn order_line_json(quantity: Value) -> Value {
    json!({
        "id": "9",
        "name": "Falafel and tahini bagel",
        "description": "A warm bagel filled with falafel and tahini",
        "image_url": "some-valid-url",
        "price": 6,
        "quantity": quantity
    })
}

/// A pending order body with one line
pub fn order_json(id: &str) -> Value {
    json!({
        "id": id,
        "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
        "mobileNumber": "(202) 456-1111",
        "status": "pending",
        "dishes": [order_line_json(json!(1))]
    })
}

pub fn order(id: &str, status: OrderStatus) -> Order {
    let mut order: Order = serde_json::from_value(order_json(id)).expect("order fixture");
    order.status = status;
    order
}

/// Copy of `value` without `field`
pub fn without(value: &Value, field: &str) -> Value {
    let mut value = value.clone();
    if let Some(object) = value.as_object_mut() {
        object.remove(field);
    }
    value
}

/// Copy of `value` with `field` set
pub fn with(value: &Value, field: &str, replacement: Value) -> Value {
    let mut value = value.clone();
    value[field] = replacement;
    value
}

pub fn error_of(body: &Value) -> &str {
    body["error"].as_str().expect("error message")
}
