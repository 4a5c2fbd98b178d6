use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{amenity, booking, health};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Amenity directory
        .route("/api/v1/amenities", get(amenity::list_amenities))
        .route("/api/v1/amenities/{amenity_id}", get(amenity::get_amenity))
        .route("/api/v1/amenities/{amenity_id}/schedule", get(amenity::get_schedule))

        // Booking flow
        .route("/api/v1/bookings", post(booking::create_booking).get(booking::list_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))

        // Front-desk lifecycle actions
        .route("/api/v1/bookings/{booking_id}/checkin", post(booking::check_in))
        .route("/api/v1/bookings/{booking_id}/checkout", post(booking::check_out))
        .route("/api/v1/bookings/{booking_id}/cancel", post(booking::cancel_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
