#[tokio::main]
async fn main() {
    amenity_booking_backend::run().await;
}
