use serde::{Deserialize, Serialize};

/// A bookable shared resource of the building (party hall, gym, ...).
/// Amenities are administrative configuration: the booking layer only
/// ever reads them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub usage_rules: String,
}
