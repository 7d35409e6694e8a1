//! HTTP front end tests.
//!
//! Starts the axum router on an ephemeral port and exercises it with reqwest.

use std::sync::Arc;

use fleetdb::engine::Engine;
use fleetdb::network::router;
use reqwest::StatusCode;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn body(brand: &str, year: i32, color: &str) -> Value {
    json!({
        "brand": brand,
        "model": "Model",
        "registration": "REG-1",
        "year": year,
        "color": color,
        "max_speed": 150,
        "fuel_type": "gasoline",
        "transmission": "manual",
        "passengers": 4,
        "height": 1.5,
        "width": 1.8,
        "weight": 1200.0
    })
}

/// Bind to port 0 and return the base URL.
async fn start_server(engine: Arc<Engine>) -> String {
    let app = router(engine);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn seeded_server() -> String {
    let base = start_server(Arc::new(Engine::in_memory())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles/batch"))
        .json(&json!([
            body("Toyota", 2020, "red"),
            body("Toyota", 2019, "red"),
            body("Ford", 2017, "blue"),
        ]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    base
}

async fn get_json(url: String) -> (StatusCode, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

// =============================================================================
// Listing and Creation
// =============================================================================

#[tokio::test]
async fn get_all_on_empty_store_returns_404() {
    let base = start_server(Arc::new(Engine::in_memory())).await;

    let (status, body) = get_json(format!("{base}/vehicles")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "vehicles not found" }));
}

#[tokio::test]
async fn create_then_list() {
    let base = start_server(Arc::new(Engine::in_memory())).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/vehicles"))
        .json(&body("Toyota", 2020, "red"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["message"], "vehicle created");
    assert_eq!(created["data"]["id"], 1);
    assert_eq!(created["data"]["max_speed"], 150);

    let (status, listed) = get_json(format!("{base}/vehicles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_ignores_client_id() {
    let base = start_server(Arc::new(Engine::in_memory())).await;
    let mut payload = body("Toyota", 2020, "red");
    payload["id"] = json!(1);

    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn create_missing_field_names_it() {
    let base = start_server(Arc::new(Engine::in_memory())).await;
    let mut payload = body("Toyota", 2020, "red");
    payload.as_object_mut().unwrap().remove("year");
    payload.as_object_mut().unwrap().remove("weight");

    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err, json!({ "error": "missing required field: year" }));
}

#[tokio::test]
async fn create_wrong_type_is_bad_request() {
    let base = start_server(Arc::new(Engine::in_memory())).await;
    let mut payload = body("Toyota", 2020, "red");
    payload["year"] = json!("twenty");

    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_invalid_vehicle() {
    let base = start_server(Arc::new(Engine::in_memory())).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles"))
        .json(&body("Toyota", 1800, "red"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "invalid vehicle");
}

#[tokio::test]
async fn batch_with_invalid_vehicle_inserts_nothing() {
    let base = start_server(Arc::new(Engine::in_memory())).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles/batch"))
        .json(&json!([body("A", 2000, "red"), body("", 2000, "red")]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "some vehicles are invalid");

    let (status, _) = get_json(format!("{base}/vehicles")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let base = start_server(Arc::new(Engine::in_memory())).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/vehicles"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "invalid request body");
}

// =============================================================================
// Filters
// =============================================================================

#[tokio::test]
async fn color_and_year() {
    let base = seeded_server().await;

    let (status, body) = get_json(format!("{base}/vehicles/color/red/year/2020")).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], 1);

    let (status, _) = get_json(format!("{base}/vehicles/color/red/year/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(format!("{base}/vehicles/color/red/year/1500")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid params");

    let (status, _) = get_json(format!("{base}/vehicles/color/green/year/2020")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn brand_between_years() {
    let base = seeded_server().await;

    let (status, body) =
        get_json(format!("{base}/vehicles/brand/Toyota/between/2018/2021")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, _) = get_json(format!("{base}/vehicles/brand/Toyota/between/2019/2020")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(format!("{base}/vehicles/brand/Toyota/between/2021/2018")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fuel_type_and_transmission() {
    let base = seeded_server().await;

    let (status, body) = get_json(format!("{base}/vehicles/fuel_type/gasoline")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (status, body) = get_json(format!("{base}/vehicles/fuel_type/electric")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid vehicle fuel type");

    let (status, _) = get_json(format!("{base}/vehicles/transmission/automatic")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(format!("{base}/vehicles/transmission/semi-automatic")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dimensions_query() {
    let base = seeded_server().await;

    let (status, body) =
        get_json(format!("{base}/vehicles/dimensions?height=1-2&width=1-2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // 1.5 is a bound, so it is excluded
    let (status, _) = get_json(format!("{base}/vehicles/dimensions?height=1-1.5&width=1-2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(format!("{base}/vehicles/dimensions?height=1&width=1-2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid height");

    let (status, body) = get_json(format!("{base}/vehicles/dimensions?height=x-2&width=1-2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid min height");

    let (status, body) = get_json(format!("{base}/vehicles/dimensions?height=2-1&width=1-2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid dimensions");
}

#[tokio::test]
async fn weight_query() {
    let base = seeded_server().await;

    let (status, body) = get_json(format!("{base}/vehicles/weight?min=1000&max=1300")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "vehicles with that weight were found");

    let (status, body) = get_json(format!("{base}/vehicles/weight?max=1300")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid min weight");

    let (status, body) = get_json(format!("{base}/vehicles/weight?min=0&max=1300")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid weight");
}

// =============================================================================
// Aggregates
// =============================================================================

#[tokio::test]
async fn averages_are_formatted_to_two_decimals() {
    let base = seeded_server().await;

    let (status, body) = get_json(format!("{base}/vehicles/average_speed/brand/Toyota")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "the average max speed of Toyota vehicles is 150.00" })
    );

    let (status, body) = get_json(format!("{base}/vehicles/average_capacity/brand/Ford")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "the average capacity of Ford vehicles is 4.00" })
    );

    let (status, _) = get_json(format!("{base}/vehicles/average_speed/brand/Kia")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Updates and Deletes
// =============================================================================

#[tokio::test]
async fn update_max_speed() {
    let base = seeded_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/vehicles/2/update_speed"))
        .json(&json!({ "max_speed": 210 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["max_speed"], 210);

    let resp = client
        .put(format!("{base}/vehicles/2/update_speed"))
        .json(&json!({ "max_speed": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .put(format!("{base}/vehicles/42/update_speed"))
        .json(&json!({ "max_speed": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .put(format!("{base}/vehicles/abc/update_speed"))
        .json(&json!({ "max_speed": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_fuel_type_of_missing_vehicle() {
    let base = seeded_server().await;

    let resp = reqwest::Client::new()
        .put(format!("{base}/vehicles/99/update_fuel"))
        .json(&json!({ "fuel_type": "diesel" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "vehicle not found");
}

#[tokio::test]
async fn update_fuel_type() {
    let base = seeded_server().await;

    let resp = reqwest::Client::new()
        .put(format!("{base}/vehicles/3/update_fuel"))
        .json(&json!({ "fuel_type": "biodiesel" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let (status, body) = get_json(format!("{base}/vehicles/fuel_type/biodiesel")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], 3);
}

#[tokio::test]
async fn delete_vehicle() {
    let base = seeded_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/vehicles/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = client
        .delete(format!("{base}/vehicles/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, listed) = get_json(format!("{base}/vehicles")).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);

    // ids keep counting after the delete
    let resp = client
        .post(format!("{base}/vehicles"))
        .json(&body("Kia", 2022, "grey"))
        .send()
        .await
        .unwrap();
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["data"]["id"], 4);
}
