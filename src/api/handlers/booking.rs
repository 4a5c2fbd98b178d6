use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{CreateBookingRequest, ListBookingsQuery};
use crate::domain::models::booking::{NewBookingParams, TransitionAction};
use crate::domain::services::ledger::BookingFilter;
use crate::domain::services::schedule::parse_hhmm;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = state
        .amenity_repo
        .find_by_id(&payload.amenity_id)
        .await?
        .ok_or(AppError::NotFound("Amenity not found".into()))?;

    if payload.resident_name.trim().is_empty() || payload.unit.trim().is_empty() {
        return Err(AppError::Validation("Resident name and unit are required".into()));
    }

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;
    let start_time = parse_hhmm(&payload.start_time)?;
    let end_time = parse_hhmm(&payload.end_time)?;

    let created = state
        .booking_repo
        .create(NewBookingParams {
            amenity_id: amenity.id.clone(),
            resident_id: payload.resident_id,
            resident_name: payload.resident_name,
            unit: payload.unit,
            date,
            start_time,
            end_time,
        })
        .await;

    let booking = match created {
        Ok(booking) => booking,
        Err(err) => {
            warn!("Booking rejected for amenity {}: {}", amenity.id, err);
            return Err(err);
        }
    };

    info!("Booking confirmed: {} for amenity {}", booking.id, amenity.id);
    Ok(Json(booking))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = match query.filter.as_deref() {
        None | Some("all") | Some("today") => BookingFilter::All,
        Some("pending") => BookingFilter::Pending,
        Some(other) => {
            return Err(AppError::Validation(format!(
                "Unknown filter '{}': expected all, pending or today",
                other
            )))
        }
    };

    // The "today" tab resolves the venue's current local date itself; the
    // other views name the date explicitly.
    let date = if query.filter.as_deref() == Some("today") {
        Local::now().date_naive()
    } else {
        let raw = query
            .date
            .as_deref()
            .ok_or(AppError::Validation("date query parameter is required".into()))?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid date format".into()))?
    };

    let bookings = state.booking_repo.list_for_date(date, filter).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn check_in(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .transition(&booking_id, TransitionAction::CheckIn)
        .await?;
    info!("Booking checked in: {}", booking.id);
    Ok(Json(booking))
}

pub async fn check_out(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .transition(&booking_id, TransitionAction::CheckOut)
        .await?;
    info!("Booking checked out: {}", booking.id);
    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .transition(&booking_id, TransitionAction::Cancel)
        .await?;
    info!("Booking cancelled: {}", booking.id);
    Ok(Json(booking))
}
