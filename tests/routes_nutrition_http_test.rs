// ABOUTME: HTTP integration tests for food search and nutrition routes
// ABOUTME: Drives the full middleware stack against the sample catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for `/api/*` routes

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{resources_with, sample_catalog, sample_resources, SAMPLE_FOODS};
use nutrition_lookup::config::ServerConfig;
use nutrition_lookup::server;
use serde_json::Value;

/// Full application over the sample catalog
fn app() -> axum::Router {
    common::init_test_logging();
    server::build_app(&sample_resources())
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|food| food["name"].as_str().unwrap())
        .collect()
}

fn close(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-9
}

// ============================================================================
// GET /api/search
// ============================================================================

#[tokio::test]
async fn test_search_matches_substring_in_catalog_order() {
    let response = AxumTestRequest::get("/api/search?query=coffee")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(names(&body), vec!["Iced Coffee", "Coffee Cake"]);
}

#[tokio::test]
async fn test_search_tokens_are_anded() {
    let response = AxumTestRequest::get("/api/search?query=cake%20coffee")
        .send(app())
        .await;

    let body: Value = response.json();
    assert_eq!(names(&body), vec!["Coffee Cake"]);
}

#[tokio::test]
async fn test_search_without_query_is_empty() {
    for uri in ["/api/search", "/api/search?query=", "/api/search?query=%20%20"] {
        let response = AxumTestRequest::get(uri).send(app()).await;
        assert_eq!(response.status(), 200);
        let body: Value = response.json();
        assert_eq!(body, serde_json::json!([]));
    }
}

#[tokio::test]
async fn test_search_results_carry_allergens() {
    let response = AxumTestRequest::get("/api/search?query=latte")
        .send(app())
        .await;

    let body: Value = response.json();
    assert_eq!(
        body[0]["allergens"],
        serde_json::json!([{ "name": "Dairy", "definite": true }])
    );

    // Stored allergens are returned as stored
    let response = AxumTestRequest::get("/api/search?query=peanut")
        .send(app())
        .await;
    let body: Value = response.json();
    assert_eq!(
        body[0]["allergens"],
        serde_json::json!([{ "name": "Peanut", "definite": true }])
    );
}

#[tokio::test]
async fn test_eggplant_is_not_flagged_as_egg() {
    let response = AxumTestRequest::get("/api/search?query=eggplant")
        .send(app())
        .await;

    let body: Value = response.json();
    assert_eq!(body[0]["allergens"], serde_json::json!([]));
}

// ============================================================================
// GET /api/nutrition
// ============================================================================

#[tokio::test]
async fn test_nutrition_latte_half_serving() {
    let response = AxumTestRequest::get("/api/nutrition?query=latte&quantity=120&unit=ml")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    assert_eq!(body["name"], "Latte");
    assert!(close(&body["calories"], 60.0));
    assert!(close(&body["protein"], 4.0));
    assert!(close(&body["carbs"], 5.0));
    assert!(close(&body["fat"], 2.25));
    assert_eq!(body["unit"], "ml");
    assert_eq!(body["serving_unit"], "ml");
    assert_eq!(body["is_liquid"], true);
    assert_eq!(body["acidity_description"], "Moderate acidity");
    assert_eq!(
        body["macronutrient_ratios"],
        serde_json::json!({ "protein": 28, "carbs": 36, "fat": 36 })
    );
    assert!(body["allergen_notice"].is_string());
}

#[tokio::test]
async fn test_nutrition_defaults_to_100_grams() {
    let response = AxumTestRequest::get("/api/nutrition?query=coffee%20cake")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert!(close(&body["quantity"], 100.0));
    assert_eq!(body["unit"], "g");
    assert!(close(&body["calories"], 410.0));
    assert!(close(&body["fiber"], 1.2));
    assert_eq!(body["is_liquid"], false);
}

#[tokio::test]
async fn test_nutrition_inferred_liquid_accepts_fluid_ounces() {
    let response = AxumTestRequest::get("/api/nutrition?query=orange%20juice&quantity=8&unit=oz")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    // 8 fl oz = 236.588 ml of a 100 ml serving
    assert!(close(&body["calories"], 106.5));
    assert_eq!(body["unit"], "oz");
    assert_eq!(body["serving_unit"], "ml");
    assert_eq!(body["acidity_description"], "High acidity");
}

#[tokio::test]
async fn test_nutrition_missing_query_is_bad_request() {
    let response = AxumTestRequest::get("/api/nutrition?quantity=100&unit=g")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_nutrition_rejects_bad_quantities() {
    let response = AxumTestRequest::get("/api/nutrition?query=latte&quantity=lots&unit=ml")
        .send(app())
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    for quantity in ["0", "-5"] {
        let uri = format!("/api/nutrition?query=latte&quantity={quantity}&unit=ml");
        let response = AxumTestRequest::get(&uri).send(app()).await;
        assert_eq!(response.status(), 400);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    }
}

#[tokio::test]
async fn test_nutrition_bad_quantity_wins_over_unknown_food() {
    let response = AxumTestRequest::get("/api/nutrition?query=durian&quantity=-1&unit=g")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_nutrition_overflowing_quantity_is_bad_request() {
    let response = AxumTestRequest::get("/api/nutrition?query=latte&quantity=1e308&unit=cups")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert!(body.get("calories").is_none());
}

#[tokio::test]
async fn test_nutrition_egg_dishes_flag_egg() {
    let catalog = nutrition_lookup::catalog::FoodCatalog::new(vec![
        serde_json::from_value(serde_json::json!({ "name": "Boiled Egg", "calories": 155 }))
            .unwrap(),
    ]);
    let app = server::build_app(&resources_with(catalog, ServerConfig::default()));

    let response = AxumTestRequest::get("/api/nutrition?query=boiled%20egg&quantity=50&unit=g")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["allergens"],
        serde_json::json!([{ "name": "Egg", "definite": true }])
    );
}

#[tokio::test]
async fn test_nutrition_unknown_unit() {
    let response = AxumTestRequest::get("/api/nutrition?query=latte&quantity=1&unit=furlong")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_nutrition_unit_mismatch() {
    let response = AxumTestRequest::get("/api/nutrition?query=latte&quantity=100&unit=g")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNIT_MISMATCH");
    assert!(body["error"]["message"].as_str().unwrap().contains("'ml'"));

    let response = AxumTestRequest::get("/api/nutrition?query=peanut%20butter&quantity=1&unit=cups")
        .send(app())
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_nutrition_unknown_food_is_not_found() {
    let response = AxumTestRequest::get("/api/nutrition?query=durian&quantity=100&unit=g")
        .send(app())
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

// ============================================================================
// GET /api/foods, /api/foods/:name, /api/categories
// ============================================================================

#[tokio::test]
async fn test_list_all_food_names() {
    let response = AxumTestRequest::get("/api/foods").send(app()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["foods"].as_array().unwrap().len(), SAMPLE_FOODS);
    assert_eq!(body["foods"][0], "Latte");
}

#[tokio::test]
async fn test_list_foods_filters() {
    let response = AxumTestRequest::get("/api/foods?query=coffee")
        .send(app())
        .await;
    let body: Value = response.json();
    assert_eq!(body["foods"], serde_json::json!(["Iced Coffee", "Coffee Cake"]));

    let response = AxumTestRequest::get("/api/foods?category=beverages")
        .send(app())
        .await;
    let body: Value = response.json();
    assert_eq!(
        body["foods"],
        serde_json::json!(["Latte", "Iced Coffee", "Black Tea", "Orange Juice"])
    );
}

#[tokio::test]
async fn test_list_foods_query_respects_limit() {
    let config = ServerConfig {
        search_result_limit: 1,
        ..ServerConfig::default()
    };
    let app = server::build_app(&resources_with(sample_catalog(), config));

    let response = AxumTestRequest::get("/api/foods?query=coffee").send(app.clone()).await;
    let body: Value = response.json();
    assert_eq!(body["foods"], serde_json::json!(["Iced Coffee"]));

    // No query, no cap
    let response = AxumTestRequest::get("/api/foods").send(app).await;
    let body: Value = response.json();
    assert_eq!(body["foods"].as_array().unwrap().len(), SAMPLE_FOODS);
}

#[tokio::test]
async fn test_get_food_by_name() {
    let response = AxumTestRequest::get("/api/foods/iced%20coffee")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["name"], "Iced Coffee");
    assert!(body["allergens"].is_array());

    let response = AxumTestRequest::get("/api/foods/durian").send(app()).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_categories_sorted_unique() {
    let response = AxumTestRequest::get("/api/categories").send(app()).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["categories"],
        serde_json::json!(["Bakery", "Beverages", "Spreads", "Vegetables"])
    );
}

// ============================================================================
// Middleware and fallback
// ============================================================================

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let response = AxumTestRequest::get("/health").send(app()).await;
    let request_id = response.header("x-request-id").unwrap();
    assert!(request_id.starts_with("req_"));

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "client-supplied-id")
        .send(app())
        .await;
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("client-supplied-id")
    );
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = AxumTestRequest::get("/api/unknown").send(app()).await;

    assert_eq!(response.status(), 404);
    assert!(response.header("x-request-id").is_some());
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"].as_object().unwrap().len(), 2);
}
