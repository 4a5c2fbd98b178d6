use chrono::NaiveDate;

use crate::domain::models::booking::{Booking, NewBookingParams, TransitionAction};
use crate::domain::services::conflict::find_conflict;
use crate::error::AppError;

/// Status category used by the front-desk list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFilter {
    All,
    /// SCHEDULED or ACTIVE, the bookings that still need attention.
    Pending,
}

/// Owns the authoritative booking collection for the scheduling horizon.
///
/// The ledger is pure with respect to storage: it never performs I/O, and a
/// persistence collaborator can rehydrate one from a snapshot with
/// [`BookingLedger::with_bookings`] and read the full collection back out via
/// [`BookingLedger::bookings`].
#[derive(Debug, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self { bookings: Vec::new() }
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    /// The full collection, oldest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Creates a SCHEDULED booking after checking the candidate window
    /// against every live booking for the same amenity and date. On any
    /// failure the collection is left untouched.
    pub fn create(&mut self, params: NewBookingParams) -> Result<Booking, AppError> {
        if let Some(existing) = find_conflict(
            &params.amenity_id,
            params.date,
            params.start_time,
            params.end_time,
            &self.bookings,
        )? {
            return Err(AppError::BookingConflict {
                id: existing.id.clone(),
                start: existing.start_time.format("%H:%M").to_string(),
                end: existing.end_time.format("%H:%M").to_string(),
            });
        }

        let booking = Booking::new(params);
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn find(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn transition(&mut self, id: &str, action: TransitionAction) -> Result<Booking, AppError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        booking.apply(action)?;
        Ok(booking.clone())
    }

    /// Bookings for one calendar date, newest-created first.
    pub fn list_for_date(&self, date: NaiveDate, filter: BookingFilter) -> Vec<Booking> {
        self.bookings
            .iter()
            .rev()
            .filter(|b| b.date == date)
            .filter(|b| match filter {
                BookingFilter::All => true,
                BookingFilter::Pending => b.status.occupies_slot(),
            })
            .cloned()
            .collect()
    }

    /// Day schedule for a single amenity, newest-created first.
    pub fn list_for_amenity(&self, amenity_id: &str, date: NaiveDate) -> Vec<Booking> {
        self.bookings
            .iter()
            .rev()
            .filter(|b| b.amenity_id == amenity_id && b.date == date)
            .cloned()
            .collect()
    }
}
