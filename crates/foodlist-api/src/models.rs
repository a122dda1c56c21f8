// Catalog wire types
//
// Records in the upstream collection were written by several generations of
// clients, so the same attribute shows up under different keys and with
// different JSON types. `RawFood` keeps every field as an untyped optional
// value; interpretation is left to the normalizer in `foodlist-core`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Raw record ───────────────────────────────────────────────────────

/// One item of the `/Food` collection, exactly as the server sent it.
///
/// JSON `null` and a missing key both decode to `None`. Keys we do not
/// model land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFood {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,

    // Name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    // Image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Value>,

    // Rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_rating: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Value>,

    // Restaurant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<Value>,
    #[serde(default, rename = "restaurantName", skip_serializing_if = "Option::is_none")]
    pub restaurant_name_camel: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_logo: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    /// Boolean open flag written by the seed data. Not consulted for status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<Value>,
    /// Nested `{name, logo, status}` written by our own create/update payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Value>,

    // Price
    #[serde(default, rename = "Price", skip_serializing_if = "Option::is_none")]
    pub price_capitalized: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,

    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawFood {
    /// Decode one collection element.
    ///
    /// Never fails: an element that is not a JSON object (or that serde
    /// cannot map) yields an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Look up a key inside the nested `restaurant` object.
    pub fn nested_restaurant(&self, key: &str) -> Option<&Value> {
        self.restaurant
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|obj| obj.get(key))
    }
}

// ── Write payloads ───────────────────────────────────────────────────

/// Body for `POST /Food` and `PUT /Food/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPayload {
    pub name: String,
    pub rating: f64,
    pub image: String,
    pub restaurant: RestaurantPayload,
}

/// Restaurant sub-object of [`FoodPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPayload {
    pub name: String,
    pub logo: String,
    /// `"Open Now"` or `"Closed"`.
    pub status: String,
}

// ── Error body ───────────────────────────────────────────────────────

/// Error document some deployments return with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
