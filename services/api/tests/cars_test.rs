//! Tests for the car endpoints

mod common;

use axum::http::StatusCode;
use common::{empty_app, seeded_app};
use serde_json::{Value, json};
use uuid::Uuid;

fn camry() -> Value {
    json!({
        "make": "Toyota",
        "model": "Camry",
        "year": 2024,
        "licensePlate": "ABC-123",
        "owner": "John Smith",
        "status": "active"
    })
}

#[tokio::test]
async fn test_register_car_in_empty_store() {
    let app = empty_app();

    let (status, car) = app.post("/api/cars", camry()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(car["licensePlate"], "ABC-123");
    assert_eq!(car["status"], "active");
    assert!(car["location"].is_null());
    assert!(car["createdAt"].is_string());

    let (status, cars) = app.get("/api/cars").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cars, json!([car]));
}

#[tokio::test]
async fn test_register_car_from_form_with_blank_optionals() {
    let app = empty_app();

    let (status, car) = app
        .post(
            "/api/cars",
            json!({
                "make": "Toyota",
                "model": "Camry",
                "year": 2024,
                "licensePlate": "ABC-123",
                "owner": "John Smith",
                "status": "active",
                "location": "",
                "latitude": "",
                "longitude": ""
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{car}");
    assert!(car["location"].is_null());
    assert!(car["latitude"].is_null());
    assert!(car["longitude"].is_null());
}

#[tokio::test]
async fn test_car_requires_status_and_fields() {
    let app = empty_app();

    let mut without_status = camry();
    without_status
        .as_object_mut()
        .expect("object")
        .remove("status");

    let mut bad_coordinates = camry();
    bad_coordinates["latitude"] = json!("north-ish");

    let mut wrong_year = camry();
    wrong_year["year"] = json!("2024");

    for body in [json!({ "make": "Toyota" }), without_status, bad_coordinates, wrong_year] {
        let (status, body) = app.post("/api/cars", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid car data");
    }

    let (_, cars) = app.get("/api/cars").await;
    assert_eq!(cars, json!([]));
}

#[tokio::test]
async fn test_duplicate_license_plate_conflicts() {
    let app = seeded_app().await;

    let (status, body) = app.post("/api/cars", camry()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "License plate already exists");
}

#[tokio::test]
async fn test_update_car_keeps_other_fields() {
    let app = seeded_app().await;
    let civic = app
        .store
        .cars
        .get_by_license_plate("XYZ-456")
        .await
        .expect("civic is seeded");
    let uri = format!("/api/cars/{}", civic.id);

    let (status, body) = app
        .put(&uri, json!({ "status": "active", "image": null }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert!(body["image"].is_null());
    assert_eq!(body["owner"], "Sarah Johnson");
    assert_eq!(body["latitude"], "34.0522");

    let (_, fetched) = app.get(&uri).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_update_car_to_taken_plate_conflicts() {
    let app = seeded_app().await;
    let civic = app
        .store
        .cars
        .get_by_license_plate("XYZ-456")
        .await
        .expect("civic is seeded");

    let (status, _) = app
        .put(
            &format!("/api/cars/{}", civic.id),
            json!({ "licensePlate": "DEF-789" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(app.store.cars.get_by_license_plate("XYZ-456").await.is_some());
}

#[tokio::test]
async fn test_update_unknown_car() {
    let app = seeded_app().await;

    let (status, body) = app
        .put(
            &format!("/api/cars/{}", Uuid::new_v4()),
            json!({ "owner": "Nobody" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Car not found");
}

#[tokio::test]
async fn test_delete_car_twice() {
    let app = empty_app();
    let (_, car) = app.post("/api/cars", camry()).await;
    let uri = format!("/api/cars/{}", car["id"].as_str().expect("id"));

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Car deleted successfully");

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Car not found");

    // The plate is free again
    let (status, _) = app.post("/api/cars", camry()).await;
    assert_eq!(status, StatusCode::CREATED);
}
