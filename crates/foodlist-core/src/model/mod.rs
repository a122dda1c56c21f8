// ── Domain model ──
//
// Canonical types produced by the normalizer and held by the list
// controller. Nothing here knows about upstream field aliases.

pub mod food;
pub mod food_id;

pub use food::{Food, MAX_RATING, MIN_RATING, Restaurant, RestaurantStatus};
pub use food_id::FoodId;
