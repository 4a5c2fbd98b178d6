use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::domain::models::amenity::Amenity;
use crate::infra::repositories::{
    memory_amenity_repo::MemoryAmenityRepo, memory_booking_repo::MemoryBookingRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let amenities = match &config.amenities_file {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .unwrap_or_else(|e| panic!("Failed to read amenities file {}: {}", path, e));
            serde_json::from_str(&raw)
                .unwrap_or_else(|e| panic!("Invalid amenities file {}: {}", path, e))
        }
        None => default_amenities(),
    };

    info!("Loaded {} bookable amenities", amenities.len());

    AppState {
        config: config.clone(),
        amenity_repo: Arc::new(MemoryAmenityRepo::new(amenities)),
        booking_repo: Arc::new(MemoryBookingRepo::new()),
    }
}

fn default_amenities() -> Vec<Amenity> {
    vec![
        Amenity {
            id: "party-hall".to_string(),
            name: "Party Hall".to_string(),
            capacity: 60,
            usage_rules: "Sound system off after 22:00. Leave the hall as found.".to_string(),
        },
        Amenity {
            id: "barbecue".to_string(),
            name: "Barbecue Area".to_string(),
            capacity: 20,
            usage_rules: "Charcoal only. Clean the grill after use.".to_string(),
        },
        Amenity {
            id: "gym".to_string(),
            name: "Gym".to_string(),
            capacity: 15,
            usage_rules: "Wipe down equipment. No children under 14.".to_string(),
        },
        Amenity {
            id: "pool".to_string(),
            name: "Swimming Pool".to_string(),
            capacity: 30,
            usage_rules: "Shower before entering. No glass containers.".to_string(),
        },
    ]
}
