use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::services::schedule::hhmm;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Scheduled,
    Active,
    Completed,
    Canceled,
}

impl BookingStatus {
    /// Statuses that still occupy the amenity for conflict purposes.
    pub fn occupies_slot(&self) -> bool {
        matches!(self, BookingStatus::Scheduled | BookingStatus::Active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Canceled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "SCHEDULED",
            BookingStatus::Active => "ACTIVE",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Canceled => "CANCELED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    CheckIn,
    CheckOut,
    Cancel,
}

impl TransitionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionAction::CheckIn => "checkin",
            TransitionAction::CheckOut => "checkout",
            TransitionAction::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    pub id: String,
    pub amenity_id: String,
    pub resident_id: String,
    pub resident_name: String,
    pub unit: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub amenity_id: String,
    pub resident_id: String,
    pub resident_name: String,
    pub unit: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amenity_id: params.amenity_id,
            resident_id: params.resident_id,
            resident_name: params.resident_name,
            unit: params.unit,
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            status: BookingStatus::Scheduled,
            created_at: Utc::now(),
        }
    }

    /// Applies a front-desk action. Terminal statuses never transition again.
    pub fn apply(&mut self, action: TransitionAction) -> Result<(), AppError> {
        use BookingStatus::*;

        let next = match (self.status, action) {
            (Scheduled, TransitionAction::CheckIn) => Active,
            (Active, TransitionAction::CheckOut) => Completed,
            (Scheduled, TransitionAction::Cancel) | (Active, TransitionAction::Cancel) => Canceled,
            (current, action) => {
                return Err(AppError::InvalidTransition(format!(
                    "cannot {} a booking in status {}",
                    action.as_str(),
                    current.as_str()
                )))
            }
        };

        self.status = next;
        Ok(())
    }
}
