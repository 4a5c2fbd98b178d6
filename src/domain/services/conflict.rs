use chrono::{NaiveDate, NaiveTime};

use crate::domain::models::booking::Booking;
use crate::domain::services::schedule::{intervals_overlap, to_minutes};
use crate::error::AppError;

/// Returns the first live booking whose window overlaps the candidate, or
/// `None` when the slot is free. Bookings in a terminal status no longer
/// occupy the amenity and are skipped.
///
/// An inverted or zero-length candidate is an error, never conflict-free:
/// a malformed request must not slip through as bookable.
pub fn find_conflict<'a>(
    amenity_id: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    existing: &'a [Booking],
) -> Result<Option<&'a Booking>, AppError> {
    if start >= end {
        return Err(AppError::InvalidInterval {
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        });
    }

    let cand_start = to_minutes(start);
    let cand_end = to_minutes(end);

    Ok(existing.iter().find(|booking| {
        booking.amenity_id == amenity_id
            && booking.date == date
            && booking.status.occupies_slot()
            && intervals_overlap(
                cand_start,
                cand_end,
                to_minutes(booking.start_time),
                to_minutes(booking.end_time),
            )
    }))
}
