use crate::domain::models::amenity::Amenity;
use crate::domain::ports::AmenityRepository;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only amenity directory seeded at startup. Amenity administration is
/// handled elsewhere; the booking service only consults the directory.
pub struct MemoryAmenityRepo {
    amenities: Vec<Amenity>,
}

impl MemoryAmenityRepo {
    pub fn new(amenities: Vec<Amenity>) -> Self {
        Self { amenities }
    }
}

#[async_trait]
impl AmenityRepository for MemoryAmenityRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<Amenity>, AppError> {
        Ok(self.amenities.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Amenity>, AppError> {
        Ok(self.amenities.clone())
    }
}
