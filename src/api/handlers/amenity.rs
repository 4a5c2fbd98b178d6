use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dtos::requests::ScheduleQuery;
use crate::api::dtos::responses::ScheduleResponse;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_amenities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let amenities = state.amenity_repo.list().await?;
    Ok(Json(amenities))
}

pub async fn get_amenity(
    State(state): State<Arc<AppState>>,
    Path(amenity_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = state
        .amenity_repo
        .find_by_id(&amenity_id)
        .await?
        .ok_or(AppError::NotFound("Amenity not found".into()))?;
    Ok(Json(amenity))
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(amenity_id): Path<String>,
    Query(query): Query<ScheduleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = state
        .amenity_repo
        .find_by_id(&amenity_id)
        .await?
        .ok_or(AppError::NotFound("Amenity not found".into()))?;

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let bookings = state.booking_repo.list_for_amenity(&amenity.id, date).await?;

    Ok(Json(ScheduleResponse {
        amenity,
        date: query.date,
        bookings,
    }))
}
