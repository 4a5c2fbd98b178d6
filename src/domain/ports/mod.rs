use crate::domain::models::amenity::Amenity;
use crate::domain::models::booking::{Booking, NewBookingParams, TransitionAction};
use crate::domain::services::ledger::BookingFilter;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Amenity>, AppError>;
    async fn list(&self) -> Result<Vec<Amenity>, AppError>;
}

/// Booking store. Implementations must make `create` atomic with respect to
/// the conflict check: two overlapping candidates racing each other may not
/// both succeed.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, params: NewBookingParams) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_for_date(
        &self,
        date: NaiveDate,
        filter: BookingFilter,
    ) -> Result<Vec<Booking>, AppError>;
    async fn list_for_amenity(
        &self,
        amenity_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError>;
    async fn transition(&self, id: &str, action: TransitionAction) -> Result<Booking, AppError>;
}
