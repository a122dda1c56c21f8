// foodlist-api: Async Rust client for the food catalog REST collection

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{DEFAULT_COLLECTION, FoodClient};
pub use error::Error;
pub use models::{FoodPayload, RawFood, RestaurantPayload};
pub use transport::TransportConfig;
