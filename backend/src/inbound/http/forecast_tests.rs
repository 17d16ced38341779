//! Endpoint tests for the forecast handler.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{fixture_state, test_app};

#[actix_web::test]
async fn forecast_returns_aggregated_days_for_the_range() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/forecast?location=Toronto&startDate=2026-02-16&endDate=2026-02-20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["locationName"], json!("Toronto, CA"));
    let days = body["days"].as_array().expect("days array");
    assert_eq!(days.len(), 2);
    // Fixture day one carries 18.0 and 22.0 samples; icon from the first.
    assert_eq!(days[0]["day"], json!("2026-02-16"));
    assert_eq!(days[0]["min"], json!(18.0));
    assert_eq!(days[0]["max"], json!(22.0));
    assert_eq!(days[0]["icon"], json!("03d"));
    assert_eq!(days[1]["day"], json!("2026-02-17"));
}

#[actix_web::test]
async fn forecast_range_filter_is_inclusive_per_day() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/forecast?location=Toronto&startDate=2026-02-17&endDate=2026-02-17")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let body: Value = actix_test::read_body_json(response).await;
    let days = body["days"].as_array().expect("days array");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["day"], json!("2026-02-17"));
}

#[actix_web::test]
async fn forecast_without_location_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/forecast?startDate=2026-02-16&endDate=2026-02-20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "location is required" }));
}

#[actix_web::test]
async fn forecast_without_dates_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/forecast?location=Toronto")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn forecast_with_reversed_range_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/forecast?location=Toronto&startDate=2026-02-20&endDate=2026-02-16")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn forecast_for_unknown_location_returns_404() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/forecast?location=Atlantis&startDate=2026-02-16&endDate=2026-02-20")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Location not found" }));
}
