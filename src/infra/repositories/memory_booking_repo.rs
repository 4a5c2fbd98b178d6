use crate::domain::models::booking::{Booking, NewBookingParams, TransitionAction};
use crate::domain::ports::BookingRepository;
use crate::domain::services::ledger::{BookingFilter, BookingLedger};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// Booking store backed by the in-process ledger. The write lock keeps the
/// conflict check and the append in one critical section, so two racing
/// create calls for the same window cannot both pass the check.
#[derive(Default)]
pub struct MemoryBookingRepo {
    ledger: RwLock<BookingLedger>,
}

impl MemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(BookingLedger::new()),
        }
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepo {
    async fn create(&self, params: NewBookingParams) -> Result<Booking, AppError> {
        self.ledger.write().await.create(params)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.ledger.read().await.find(id).cloned())
    }

    async fn list_for_date(
        &self,
        date: NaiveDate,
        filter: BookingFilter,
    ) -> Result<Vec<Booking>, AppError> {
        Ok(self.ledger.read().await.list_for_date(date, filter))
    }

    async fn list_for_amenity(
        &self,
        amenity_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError> {
        Ok(self.ledger.read().await.list_for_amenity(amenity_id, date))
    }

    async fn transition(&self, id: &str, action: TransitionAction) -> Result<Booking, AppError> {
        self.ledger.write().await.transition(id, action)
    }
}
