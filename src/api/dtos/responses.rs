use serde::Serialize;

use crate::domain::models::{amenity::Amenity, booking::Booking};

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub amenity: Amenity,
    pub date: String,
    pub bookings: Vec<Booking>,
}
