use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub amenity_id: String,
    pub resident_id: String,
    pub resident_name: String,
    pub unit: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct ListBookingsQuery {
    pub date: Option<String>,
    pub filter: Option<String>,
}

#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub date: String,
}
