//! HTTP tests for /dishes

mod harness;

use axum::http::StatusCode;
use harness::*;
use serde_json::{Value, json};

mod create {
    use super::*;

    #[tokio::test]
    async fn test_creates_dish_and_assigns_id() {
        let app = TestApp::new();
        let response = app
            .server
            .post("/dishes")
            .json(&json!({ "data": dish_json("Pepperoni pizza") }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert!(body.get("error").is_none());
        let id = body["data"]["id"].as_str().unwrap();
        assert_eq!(id, "1000");
        assert_eq!(body["data"]["name"], "Pepperoni pizza");
        assert_eq!(app.stored_dish(id).await.unwrap().name, "Pepperoni pizza");
    }

    #[tokio::test]
    async fn test_client_id_is_ignored() {
        let app = TestApp::new();
        let data = with(&dish_json("Soup"), "id", json!("mine"));
        let response = app.server.post("/dishes").json(&json!({ "data": data })).await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["data"]["id"], "1000");
        assert!(app.stored_dish("mine").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_or_blank_fields_are_rejected() {
        let app = TestApp::new();
        for field in ["name", "description", "image_url", "price"] {
            for data in [
                without(&dish_json("Soup"), field),
                with(&dish_json("Soup"), field, json!("")),
            ] {
                let response = app.server.post("/dishes").json(&json!({ "data": data })).await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body = response.json::<Value>();
                assert!(body.get("data").is_none());
                assert!(error_of(&body).contains(field), "field {}", field);
            }
        }
        assert!(app.dishes.is_empty());
    }

    #[tokio::test]
    async fn test_name_of_only_spaces_is_rejected() {
        let app = TestApp::new();
        let data = with(&dish_json("Soup"), "name", json!("   "));
        let response = app.server.post("/dishes").json(&json!({ "data": data })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(error_of(&response.json::<Value>()).contains("name"));
    }

    #[tokio::test]
    async fn test_price_must_be_positive_integer() {
        let app = TestApp::new();
        for price in [json!(0), json!(-1), json!(-9007199254740991_i64), json!("17"), json!(2.5)] {
            let data = with(&dish_json("Soup"), "price", price.clone());
            let response = app.server.post("/dishes").json(&json!({ "data": data })).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(
                error_of(&response.json::<Value>()).contains("price"),
                "price {}",
                price
            );
        }
    }

    #[tokio::test]
    async fn test_created_dish_reads_back_unchanged() {
        let app = TestApp::new();
        let submitted = dish_json("Dolcelatte and chickpea spaghetti");
        let created = app
            .server
            .post("/dishes")
            .json(&json!({ "data": submitted }))
            .await
            .json::<Value>();

        let id = created["data"]["id"].as_str().unwrap();
        let expected = with(&submitted, "id", json!(id));
        assert_eq!(created, json!({ "data": expected }));

        let response = app.server.get(&format!("/dishes/{}", id)).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "data": expected }));
    }

    #[tokio::test]
    async fn test_prices_across_the_u64_range_are_kept_exactly() {
        let app = TestApp::new();
        for price in [9_223_372_036_854_775_808u64, u64::MAX] {
            let data = with(&dish_json("Caviar"), "price", json!(price));
            let response = app.server.post("/dishes").json(&json!({ "data": data })).await;
            response.assert_status(StatusCode::CREATED);
            assert_eq!(response.json::<Value>()["data"]["price"], json!(price));
        }

        let past_u64: Value = serde_json::from_str("18446744073709551616").unwrap();
        let data = with(&dish_json("Caviar"), "price", past_u64);
        let response = app.server.post("/dishes").json(&json!({ "data": data })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(error_of(&response.json::<Value>()).contains("price"));
        assert_eq!(app.dishes.len(), 2);
    }

    #[tokio::test]
    async fn test_first_failing_field_is_reported() {
        let app = TestApp::new();
        let response = app.server.post("/dishes").json(&json!({ "data": {} })).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            error_of(&response.json::<Value>()),
            "Dish must include a 'name'"
        );
    }

    #[tokio::test]
    async fn test_body_without_data_fails_on_first_field() {
        let app = TestApp::new();
        let response = app.server.post("/dishes").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(error_of(&response.json::<Value>()).contains("name"));
    }
}

mod read {
    use super::*;

    #[tokio::test]
    async fn test_returns_existing_dish() {
        let app = TestApp::new();
        app.insert_dish(dish("42", "Bagel")).await;

        let response = app.server.get("/dishes/42").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "data": {
                "id": "42",
                "name": "Bagel",
                "description": "A warm bagel filled with falafel and tahini",
                "price": 6,
                "image_url": "some-valid-url"
            }
        }));
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let app = TestApp::new();
        app.insert_dish(dish("42", "Bagel")).await;

        let first = app.server.get("/dishes/42").await.json::<Value>();
        let second = app.server.get("/dishes/42").await.json::<Value>();
        assert_eq!(first, second);

        let first = app.server.get("/dishes").await.json::<Value>();
        let second = app.server.get("/dishes").await.json::<Value>();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_dish_is_404() {
        let app = TestApp::new();
        let response = app.server.get("/dishes/43").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(error_of(&response.json::<Value>()), "Dish does not exist: 43");
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn test_unknown_dish_is_404() {
        let app = TestApp::new();
        let data = with(&dish_json("Soup"), "id", json!("44"));
        let response = app.server.put("/dishes/44").json(&json!({ "data": data })).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.json::<Value>().get("error").is_some());
    }

    #[tokio::test]
    async fn test_updates_dish() {
        let app = TestApp::new();
        app.insert_dish(dish("45", "Bagel")).await;

        let expected = json!({
            "id": "45",
            "name": "Falafel wrap",
            "description": "Wrapped, not bagelled",
            "price": 8,
            "image_url": "another-url"
        });
        let response = app.server.put("/dishes/45").json(&json!({ "data": expected })).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "data": expected }));
        assert_eq!(app.stored_dish("45").await.unwrap().price, 8);
    }

    #[tokio::test]
    async fn test_mismatched_body_id_is_rejected() {
        let app = TestApp::new();
        app.insert_dish(dish("46", "Bagel")).await;

        let data = with(&dish_json("Soup"), "id", json!("19"));
        let response = app.server.put("/dishes/46").json(&json!({ "data": data })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert!(body.get("data").is_none());
        assert_eq!(
            error_of(&body),
            "Dish id does not match route id. Dish: 19, Route: 46"
        );
        assert_eq!(app.stored_dish("46").await.unwrap().name, "Bagel");
    }

    #[tokio::test]
    async fn test_falsy_body_id_takes_route_id() {
        let app = TestApp::new();
        app.insert_dish(dish("47", "Bagel")).await;

        for data in [
            dish_json("Soup"),
            with(&dish_json("Soup"), "id", json!("")),
            with(&dish_json("Soup"), "id", Value::Null),
        ] {
            let response = app.server.put("/dishes/47").json(&json!({ "data": data })).await;
            response.assert_status_ok();
            let body = response.json::<Value>();
            assert_eq!(body["data"]["id"], "47");
            assert_eq!(body["data"]["name"], "Soup");
        }
    }

    #[tokio::test]
    async fn test_invalid_fields_are_rejected() {
        let app = TestApp::new();
        app.insert_dish(dish("48", "Bagel")).await;

        let cases = [
            (without(&dish_json("Soup"), "name"), "name"),
            (with(&dish_json("Soup"), "description", json!("")), "description"),
            (without(&dish_json("Soup"), "image_url"), "image_url"),
            (with(&dish_json("Soup"), "price", json!("17")), "price"),
            (with(&dish_json("Soup"), "price", json!(0)), "price"),
            (with(&dish_json("Soup"), "price", json!(-9007199254740991_i64)), "price"),
        ];
        for (data, field) in cases {
            let response = app.server.put("/dishes/48").json(&json!({ "data": data })).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(error_of(&response.json::<Value>()).contains(field));
        }
        assert_eq!(app.stored_dish("48").await.unwrap().name, "Bagel");
    }

    #[tokio::test]
    async fn test_update_keeps_list_position() {
        let app = TestApp::new();
        app.insert_dish(dish("1", "First")).await;
        app.insert_dish(dish("2", "Second")).await;

        app.server
            .put("/dishes/1")
            .json(&json!({ "data": dish_json("Renamed") }))
            .await
            .assert_status_ok();

        let body = app.server.get("/dishes").await.json::<Value>();
        assert_eq!(body["data"][0]["name"], "Renamed");
        assert_eq!(body["data"][1]["name"], "Second");
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_existing_dish_is_405() {
        let app = TestApp::new();
        app.insert_dish(dish("49", "Bagel")).await;

        let response = app.server.delete("/dishes/49").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert!(app.stored_dish("49").await.is_some());
    }

    #[tokio::test]
    async fn test_unknown_dish_is_405() {
        let app = TestApp::new();
        let response = app.server.delete("/dishes/50").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            error_of(&response.json::<Value>()),
            "DELETE not allowed for /dishes/50"
        );
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn test_returns_dishes_in_insertion_order() {
        let app = TestApp::new();
        app.insert_dish(dish("b", "Second letter")).await;
        app.insert_dish(dish("a", "First letter")).await;

        let response = app.server.get("/dishes").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_put_on_collection_is_405() {
        let app = TestApp::new();
        let response = app.server.put("/dishes").json(&json!({ "data": {} })).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
