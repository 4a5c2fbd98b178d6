mod common;

use axum::http::StatusCode;
use common::{book, parse_body, TestApp};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();
    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}

#[tokio::test]
async fn test_list_amenities_returns_the_directory() {
    let app = TestApp::new();

    let res = app.get("/api/v1/amenities").await;
    assert_eq!(res.status(), StatusCode::OK);
    let list = parse_body(res).await;
    let list = list.as_array().unwrap().clone();

    assert_eq!(list.len(), 2);
    assert!(list.iter().any(|a| a["id"] == "party-hall" && a["capacity"] == 60));
    assert!(list.iter().any(|a| a["id"] == "gym"));
}

#[tokio::test]
async fn test_get_amenity_by_id() {
    let app = TestApp::new();

    let res = app.get("/api/v1/amenities/party-hall").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], "Party Hall");
    assert!(body["usage_rules"].as_str().unwrap().contains("22:00"));

    let res = app.get("/api/v1/amenities/sauna").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schedule_shows_only_that_amenity_and_date() {
    let app = TestApp::new();

    let hall = book(&app, "party-hall", "2024-01-09", "18:00", "22:00").await;
    book(&app, "gym", "2024-01-09", "18:00", "19:00").await;
    book(&app, "party-hall", "2024-01-10", "18:00", "22:00").await;

    let res = app.get("/api/v1/amenities/party-hall/schedule?date=2024-01-09").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["amenity"]["id"], "party-hall");
    assert_eq!(body["date"], "2024-01-09");
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], hall["id"]);
}

#[tokio::test]
async fn test_schedule_rejects_bad_input() {
    let app = TestApp::new();

    let res = app.get("/api/v1/amenities/party-hall/schedule?date=JAN-9").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.get("/api/v1/amenities/sauna/schedule?date=2024-01-09").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
