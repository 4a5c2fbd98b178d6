use amenity_booking_backend::{
    api::router::create_router,
    config::Config,
    domain::models::amenity::Amenity,
    infra::repositories::{
        memory_amenity_repo::MemoryAmenityRepo, memory_booking_repo::MemoryBookingRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let config = Config {
            port: 0,
            amenities_file: None,
        };

        let amenities = vec![
            Amenity {
                id: "party-hall".to_string(),
                name: "Party Hall".to_string(),
                capacity: 60,
                usage_rules: "Sound system off after 22:00.".to_string(),
            },
            Amenity {
                id: "gym".to_string(),
                name: "Gym".to_string(),
                capacity: 15,
                usage_rules: "Wipe down equipment.".to_string(),
            },
        ];

        let state = Arc::new(AppState {
            config,
            amenity_repo: Arc::new(MemoryAmenityRepo::new(amenities)),
            booking_repo: Arc::new(MemoryBookingRepo::new()),
        });

        let router = create_router(state.clone());

        Self { router, state }
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_empty(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Books a window and returns the created booking's JSON. Panics when the
/// backend rejects it, so setup mistakes surface at the right line.
#[allow(dead_code)]
pub async fn book(app: &TestApp, amenity: &str, date: &str, start: &str, end: &str) -> Value {
    let payload = serde_json::json!({
        "amenity_id": amenity,
        "resident_id": "res-1",
        "resident_name": "Alice Martin",
        "unit": "101",
        "date": date,
        "start_time": start,
        "end_time": end,
    });

    let res = app.post_json("/api/v1/bookings", &payload).await;
    assert!(
        res.status().is_success(),
        "booking {} {}-{} on {} failed: {}",
        amenity,
        start,
        end,
        date,
        res.status()
    );
    parse_body(res).await
}
