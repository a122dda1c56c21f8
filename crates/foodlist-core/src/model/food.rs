// ── Catalog domain types ──

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

use super::food_id::FoodId;

/// Lowest rating a rated item can carry.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating a rated item can carry.
pub const MAX_RATING: f64 = 5.0;

/// Canonical catalog record.
///
/// Every field is total: the normalizer fills defaults so consumers never
/// deal with missing values, apart from the optional `restaurant`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    /// In `[1, 5]`, or `0.0` when the item has no rating.
    pub rating: f64,
    /// Absolute, relative, or data URL. Empty when none was found.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
    /// Display price, always starting with `$`.
    pub price: String,
}

impl Food {
    pub fn is_rated(&self) -> bool {
        self.rating >= MIN_RATING
    }

    /// Case-insensitive substring match on `name`.
    ///
    /// `needle` must already be trimmed and lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// The restaurant serving a [`Food`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    pub name: String,
    pub logo: String,
    pub status: RestaurantStatus,
}

/// Whether the restaurant is currently taking orders.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RestaurantStatus {
    #[serde(rename = "Open Now")]
    #[strum(serialize = "Open Now")]
    OpenNow,
    #[default]
    #[serde(rename = "Closed")]
    #[strum(serialize = "Closed")]
    Closed,
}

impl RestaurantStatus {
    pub fn is_open(self) -> bool {
        self == Self::OpenNow
    }
}
