use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{AmenityRepository, BookingRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub amenity_repo: Arc<dyn AmenityRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}
