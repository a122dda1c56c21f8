// ── Add / edit form validation ──
//
// Mutation payloads are checked field by field before they reach the
// controller. Every failing field is reported, not just the first.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use url::Url;

use foodlist_api::{FoodPayload, RestaurantPayload};

use crate::model::{Food, MAX_RATING, MIN_RATING, RestaurantStatus};

/// User-editable fields of a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodForm {
    pub food_name: String,
    pub food_rating: f64,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
}

impl Default for FoodForm {
    fn default() -> Self {
        Self {
            food_name: String::new(),
            food_rating: 0.0,
            food_image: String::new(),
            restaurant_name: String::new(),
            restaurant_logo: String::new(),
            restaurant_status: RestaurantStatus::OpenNow.to_string(),
        }
    }
}

/// Prefill an edit form from the current canonical record.
impl From<&Food> for FoodForm {
    fn from(food: &Food) -> Self {
        let (restaurant_name, restaurant_logo, status) = food.restaurant.as_ref().map_or_else(
            || (String::new(), String::new(), RestaurantStatus::OpenNow),
            |r| (r.name.clone(), r.logo.clone(), r.status),
        );
        Self {
            food_name: food.name.clone(),
            food_rating: food.rating,
            food_image: food.image.clone(),
            restaurant_name,
            restaurant_logo,
            restaurant_status: status.to_string(),
        }
    }
}

/// Form field identifiers, named after the form keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FoodName,
    FoodRating,
    FoodImage,
    RestaurantName,
    RestaurantLogo,
    RestaurantStatus,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Every rejected field of a form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: FormField, message: &str) {
        self.0.push(FieldError {
            field,
            message: message.to_owned(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message for a specific field, if it was rejected.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn is_absolute_url(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok()
}

impl FoodForm {
    /// Check every field, collecting all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.food_name.trim().is_empty() {
            errors.push(FormField::FoodName, "Food Name is required");
        }

        if !(MIN_RATING..=MAX_RATING).contains(&self.food_rating) {
            errors.push(
                FormField::FoodRating,
                "Food Rating must be a number between 1 and 5",
            );
        }

        if !is_absolute_url(&self.food_image) {
            errors.push(FormField::FoodImage, "Food Image URL is required");
        }

        if self.restaurant_name.trim().is_empty() {
            errors.push(FormField::RestaurantName, "Restaurant Name is required");
        }

        if !is_absolute_url(&self.restaurant_logo) {
            errors.push(FormField::RestaurantLogo, "Restaurant Logo URL is required");
        }

        if self.restaurant_status.parse::<RestaurantStatus>().is_err() {
            errors.push(
                FormField::RestaurantStatus,
                "Restaurant Status must be 'Open Now' or 'Closed'",
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and build the wire payload.
    pub fn into_payload(self) -> Result<FoodPayload, ValidationErrors> {
        self.validate()?;
        Ok(FoodPayload {
            name: self.food_name.trim().to_owned(),
            rating: self.food_rating,
            image: self.food_image.trim().to_owned(),
            restaurant: RestaurantPayload {
                name: self.restaurant_name.trim().to_owned(),
                logo: self.restaurant_logo.trim().to_owned(),
                status: self.restaurant_status,
            },
        })
    }
}
