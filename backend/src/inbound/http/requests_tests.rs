//! Endpoint tests for the lookup-record handlers, driven through the full
//! fixture application.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{fixture_state, test_app};

fn create_payload(location: &str) -> Value {
    json!({
        "location": location,
        "startDate": "2026-02-16",
        "endDate": "2026-02-20",
    })
}

async fn create_record(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    location: &str,
) -> Value {
    let request = actix_test::TestRequest::post()
        .uri("/api/requests")
        .set_json(create_payload(location))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn create_returns_created_record_with_advice_and_extras() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let body = create_record(&app, "Toronto").await;
    assert_eq!(body["locationRaw"], json!("Toronto"));
    assert_eq!(body["locationName"], json!("Toronto, CA"));
    assert_eq!(body["startDate"], json!("2026-02-16"));
    assert_eq!(body["weatherData"]["main"]["temp"], json!(20.5));
    assert!(body["aiAdvice"].as_str().is_some());
    assert!(
        body["extraData"]["mapUrl"]
            .as_str()
            .expect("map url present")
            .contains("mlat=43.6532")
    );
    assert!(body["id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
}

#[actix_web::test]
async fn create_for_unknown_location_returns_404_without_persisting() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/requests")
        .set_json(create_payload("Atlantis"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Location not found" }));

    let listing = actix_test::TestRequest::get()
        .uri("/api/requests")
        .to_request();
    let response = actix_test::call_service(&app, listing).await;
    let records: Value = actix_test::read_body_json(response).await;
    assert_eq!(records, json!([]));
}

#[actix_web::test]
async fn create_without_location_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/requests")
        .set_json(json!({ "startDate": "2026-02-16", "endDate": "2026-02-20" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "location is required" }));
}

#[actix_web::test]
async fn create_with_unparseable_date_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/requests")
        .set_json(json!({
            "location": "Toronto",
            "startDate": "soon",
            "endDate": "2026-02-20",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_with_reversed_range_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/requests")
        .set_json(json!({
            "location": "Toronto",
            "startDate": "2026-02-20",
            "endDate": "2026-02-16",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "startDate must be <= endDate" }));
}

#[actix_web::test]
async fn listing_returns_newest_first() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    create_record(&app, "first").await;
    create_record(&app, "second").await;

    let request = actix_test::TestRequest::get()
        .uri("/api/requests")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let records: Value = actix_test::read_body_json(response).await;
    let records = records.as_array().expect("array body");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["locationRaw"], json!("second"));
    assert_eq!(records[1]["locationRaw"], json!("first"));
}

#[actix_web::test]
async fn get_update_delete_round_trip() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    let created = create_record(&app, "Toronto").await;
    let id = created["id"].as_str().expect("id present");

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/requests/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/requests/{id}"))
        .set_json(json!({ "lat": 51.5, "aiAdvice": null }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(updated["lat"], json!(51.5));
    assert_eq!(updated["aiAdvice"], Value::Null);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/requests/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/requests/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_location_overwrites_both_names() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    let created = create_record(&app, "Toronto").await;
    let id = created["id"].as_str().expect("id present");

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/requests/{id}"))
        .set_json(json!({ "location": "Osaka" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(updated["locationRaw"], json!("Osaka"));
    assert_eq!(updated["locationName"], json!("Osaka"));
}

#[actix_web::test]
async fn update_with_reversed_dates_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    let created = create_record(&app, "Toronto").await;
    let id = created["id"].as_str().expect("id present");

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/requests/{id}"))
        .set_json(json!({ "startDate": "2026-03-10", "endDate": "2026-03-01" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_of_unknown_id_returns_404() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/requests/00000000-0000-0000-0000-000000000001")
        .set_json(json!({ "lat": 1.0 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[actix_web::test]
async fn malformed_id_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/requests/not-a-uuid")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_all_empties_the_listing() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    create_record(&app, "a").await;
    create_record(&app, "b").await;

    let request = actix_test::TestRequest::delete()
        .uri("/api/requests")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = actix_test::TestRequest::get()
        .uri("/api/requests")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let records: Value = actix_test::read_body_json(response).await;
    assert_eq!(records, json!([]));
}

#[actix_web::test]
async fn export_defaults_to_json() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    create_record(&app, "Toronto").await;

    let request = actix_test::TestRequest::get()
        .uri("/api/requests/export")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn export_csv_has_header_plus_row_per_record() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    create_record(&app, "a").await;
    create_record(&app, "b").await;

    let request = actix_test::TestRequest::get()
        .uri("/api/requests/export?format=csv")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/csv")
    );
    let body = actix_test::read_body(response).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert_eq!(text.split('\n').count(), 3);
    assert!(text.starts_with("id,locationRaw,locationName"));
}

#[actix_web::test]
async fn export_markdown_lists_each_record() {
    let app = actix_test::init_service(test_app(fixture_state())).await;
    create_record(&app, "Toronto").await;

    let request = actix_test::TestRequest::get()
        .uri("/api/requests/export?format=md")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert!(text.starts_with("# Weather Requests"));
    assert!(text.contains("## Toronto, CA"));
}

#[actix_web::test]
async fn export_with_unknown_format_returns_400() {
    let app = actix_test::init_service(test_app(fixture_state())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/requests/export?format=xml")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "format must be json|csv|md" }));
}
