// ── Raw-to-canonical record normalization ──
//
// Bridges `foodlist_api::RawFood` into the canonical `Food` model. Every
// attribute is resolved through an explicit precedence list of upstream
// keys; missing or mistyped values fall back to a fixed default. The
// mapping is total and pure: it never fails and never looks at anything
// but its input.

use serde_json::{Map, Number, Value};

use foodlist_api::RawFood;

use crate::model::{Food, FoodId, MAX_RATING, MIN_RATING, Restaurant, RestaurantStatus};

/// Price shown for records that carry none.
pub const DEFAULT_PRICE: &str = "$0.00";

// ── Helpers ────────────────────────────────────────────────────────

/// Text form of a scalar JSON value.
///
/// Missing, `null`, empty strings, `false`, arrays, and objects count as
/// absent so the next key in a precedence list gets a chance.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

/// First present value in precedence order.
fn first_text(candidates: &[Option<&Value>]) -> Option<String> {
    candidates.iter().find_map(|v| scalar_text(*v))
}

/// Coerce a JSON number or numeric string to `f64`. NaN is rejected.
///
/// Strings must contain a digit, so spelled-out `"inf"` or `"infinity"`
/// are not numbers while an overflowing `"1e400"` still is.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(s.trim())
            .filter(|t| t.bytes().any(|b| b.is_ascii_digit()))
            .and_then(|t| t.parse::<f64>().ok()),
        _ => None,
    }?;
    (!n.is_nan()).then_some(n)
}

/// `food_rating` is clamped into range; the generic `rating` fallback is
/// only accepted when it is already in range.
fn resolve_rating(raw: &RawFood) -> f64 {
    if let Some(value) = raw.food_rating.as_ref() {
        return coerce_number(value).map_or(0.0, |n| n.clamp(MIN_RATING, MAX_RATING));
    }
    raw.rating
        .as_ref()
        .and_then(coerce_number)
        .filter(|n| (MIN_RATING..=MAX_RATING).contains(n))
        .unwrap_or(0.0)
}

/// Only the literal strings `"Open"` and `"Open Now"` mean open.
fn resolve_status(raw: &RawFood) -> RestaurantStatus {
    let status = first_text(&[
        raw.restaurant_status.as_ref(),
        raw.status.as_ref(),
        raw.nested_restaurant("status"),
    ]);
    match status.as_deref() {
        Some("Open" | "Open Now") => RestaurantStatus::OpenNow,
        _ => RestaurantStatus::Closed,
    }
}

fn resolve_restaurant(raw: &RawFood) -> Option<Restaurant> {
    let logo = first_text(&[
        raw.restaurant_logo.as_ref(),
        raw.logo.as_ref(),
        raw.nested_restaurant("logo"),
    ])
    .unwrap_or_default();
    let name = first_text(&[
        raw.restaurant_name.as_ref(),
        raw.restaurant_name_camel.as_ref(),
        raw.nested_restaurant("name"),
    ])
    .unwrap_or_default();

    if logo.is_empty() && name.is_empty() {
        return None;
    }

    Some(Restaurant {
        name,
        logo,
        status: resolve_status(raw),
    })
}

fn resolve_price(raw: &RawFood) -> String {
    match first_text(&[raw.price_capitalized.as_ref(), raw.price.as_ref()]) {
        Some(price) if price.starts_with('$') => price,
        Some(price) => format!("${price}"),
        None => DEFAULT_PRICE.to_owned(),
    }
}

// ── Normalizer ─────────────────────────────────────────────────────

/// Map one upstream record to its canonical form.
///
/// Total: any input, including an empty record, yields a valid [`Food`].
pub fn normalize(raw: &RawFood) -> Food {
    Food {
        id: FoodId::from(scalar_text(raw.id.as_ref()).unwrap_or_default()),
        name: first_text(&[raw.food_name.as_ref(), raw.name.as_ref()]).unwrap_or_default(),
        rating: resolve_rating(raw),
        image: first_text(&[raw.food_image.as_ref(), raw.image.as_ref(), raw.avatar.as_ref()])
            .unwrap_or_default(),
        restaurant: resolve_restaurant(raw),
        price: resolve_price(raw),
    }
}

impl From<&RawFood> for Food {
    fn from(raw: &RawFood) -> Self {
        normalize(raw)
    }
}

impl From<RawFood> for Food {
    fn from(raw: RawFood) -> Self {
        normalize(&raw)
    }
}

// ── Canonical-to-raw ───────────────────────────────────────────────

fn text_value(s: &str) -> Option<Value> {
    (!s.is_empty()).then(|| Value::String(s.to_owned()))
}

/// Express a canonical record using the canonical upstream keys.
///
/// Normalizing the result yields the same `Food` again.
impl From<&Food> for RawFood {
    fn from(food: &Food) -> Self {
        let restaurant = food.restaurant.as_ref().map(|r| {
            let mut obj = Map::new();
            obj.insert("name".into(), Value::String(r.name.clone()));
            obj.insert("logo".into(), Value::String(r.logo.clone()));
            obj.insert("status".into(), Value::String(r.status.to_string()));
            Value::Object(obj)
        });

        RawFood {
            id: text_value(food.id.as_str()),
            name: text_value(&food.name),
            image: text_value(&food.image),
            rating: Number::from_f64(food.rating).map(Value::Number),
            restaurant,
            price: text_value(&food.price),
            ..RawFood::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn raw(value: Value) -> RawFood {
        RawFood::from_value(value)
    }

    fn norm(value: Value) -> Food {
        normalize(&raw(value))
    }

    // ── Totality ────────────────────────────────────────────────────

    #[test]
    fn empty_record_gets_every_default() {
        let food = norm(json!({}));
        assert_eq!(
            food,
            Food {
                id: FoodId::default(),
                name: String::new(),
                rating: 0.0,
                image: String::new(),
                restaurant: None,
                price: "$0.00".into(),
            }
        );
    }

    #[test]
    fn spelled_out_infinity_is_not_a_rating() {
        assert_eq!(norm(json!({ "food_rating": "inf" })).rating, 0.0);
        assert_eq!(norm(json!({ "food_rating": "-Infinity" })).rating, 0.0);
        assert_eq!(norm(json!({ "rating": "infinity" })).rating, 0.0);
        assert_eq!(norm(json!({ "food_rating": "1e400" })).rating, 5.0);
    }

    #[test]
    fn malformed_inputs_stay_in_bounds() {
        let inputs = [
            json!({}),
            json!({ "food_rating": "abc", "price": 3 }),
            json!({ "food_rating": [1, 2], "rating": 4 }),
            json!({ "rating": "NaN" }),
            json!({ "food_rating": "NaN" }),
            json!({ "food_rating": -12 }),
            json!({ "rating": { "value": 3 } }),
            json!({ "name": 7, "food_image": false, "Price": true }),
            json!({ "restaurant": [], "status": {}, "restaurant_status": null }),
            json!({ "food_rating": "1e400" }),
            json!({ "food_rating": "inf" }),
            json!({ "food_rating": "-Infinity" }),
            json!({ "rating": "infinity" }),
        ];
        for input in inputs {
            let food = norm(input.clone());
            assert!(
                (0.0..=5.0).contains(&food.rating),
                "rating out of range for {input}: {}",
                food.rating
            );
            assert!(!food.rating.is_nan(), "NaN rating for {input}");
            assert!(food.price.starts_with('$'), "bad price for {input}: {}", food.price);
        }
    }

    // ── Name / image ────────────────────────────────────────────────

    #[test]
    fn name_prefers_food_name() {
        assert_eq!(norm(json!({ "food_name": "A", "name": "B" })).name, "A");
        assert_eq!(norm(json!({ "name": "B" })).name, "B");
        assert_eq!(norm(json!({ "food_name": "", "name": "B" })).name, "B");
        assert_eq!(norm(json!({ "food_name": null, "name": "B" })).name, "B");
    }

    #[test]
    fn image_precedence() {
        let all = json!({ "food_image": "f.png", "image": "i.png", "avatar": "a.png" });
        assert_eq!(norm(all).image, "f.png");
        assert_eq!(norm(json!({ "image": "i.png", "avatar": "a.png" })).image, "i.png");
        assert_eq!(norm(json!({ "avatar": "a.png" })).image, "a.png");
        assert_eq!(
            norm(json!({ "image": "data:image/png;base64,AAAA" })).image,
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn numeric_ids_become_text() {
        assert_eq!(norm(json!({ "id": 17 })).id, FoodId::from("17"));
        assert_eq!(norm(json!({ "id": "abc" })).id, FoodId::from("abc"));
    }

    // ── Rating ──────────────────────────────────────────────────────

    #[test]
    fn food_rating_is_clamped() {
        assert_eq!(norm(json!({ "food_rating": 7 })).rating, 5.0);
        assert_eq!(norm(json!({ "food_rating": 0 })).rating, 1.0);
        assert_eq!(norm(json!({ "food_rating": "4.5" })).rating, 4.5);
        assert_eq!(norm(json!({ "food_rating": " 3 " })).rating, 3.0);
    }

    #[test]
    fn fallback_rating_is_range_checked() {
        assert_eq!(norm(json!({ "rating": 7 })).rating, 0.0);
        assert_eq!(norm(json!({ "rating": 3 })).rating, 3.0);
        assert_eq!(norm(json!({ "rating": "2.5" })).rating, 2.5);
        assert_eq!(norm(json!({ "rating": 0.5 })).rating, 0.0);
    }

    #[test]
    fn present_food_rating_shadows_fallback() {
        // A non-numeric food_rating does not fall through to `rating`.
        assert_eq!(norm(json!({ "food_rating": "n/a", "rating": 4 })).rating, 0.0);
        // A null food_rating counts as absent.
        assert_eq!(norm(json!({ "food_rating": null, "rating": 4 })).rating, 4.0);
    }

    // ── Restaurant ──────────────────────────────────────────────────

    #[test]
    fn status_mapping() {
        let status = |v: Value| norm(v).restaurant.map(|r| r.status);
        assert_eq!(
            status(json!({ "restaurantName": "X", "status": "Open" })),
            Some(RestaurantStatus::OpenNow)
        );
        assert_eq!(
            status(json!({ "restaurantName": "X", "restaurant_status": "Open Now" })),
            Some(RestaurantStatus::OpenNow)
        );
        assert_eq!(
            status(json!({ "restaurantName": "X", "status": "anything-else" })),
            Some(RestaurantStatus::Closed)
        );
        assert_eq!(
            status(json!({ "restaurantName": "X", "status": true, "open": true })),
            Some(RestaurantStatus::Closed)
        );
        assert_eq!(
            status(json!({ "restaurantName": "X", "restaurant_status": "Closed", "status": "Open" })),
            Some(RestaurantStatus::Closed)
        );
    }

    #[test]
    fn restaurant_absent_without_name_or_logo() {
        assert_eq!(norm(json!({ "status": "Open" })).restaurant, None);
        assert_eq!(
            norm(json!({ "restaurant_name": "", "logo": "" })).restaurant,
            None
        );
    }

    #[test]
    fn restaurant_from_flat_keys() {
        let food = norm(json!({
            "restaurant_name": "Grill",
            "restaurantName": "Ignored",
            "logo": "grill.png",
            "status": "Open"
        }));
        assert_eq!(
            food.restaurant,
            Some(Restaurant {
                name: "Grill".into(),
                logo: "grill.png".into(),
                status: RestaurantStatus::OpenNow,
            })
        );
    }

    #[test]
    fn restaurant_from_nested_object() {
        let food = norm(json!({
            "name": "Tacos",
            "restaurant": { "name": "Taco Town", "logo": "tt.png", "status": "Open Now" }
        }));
        assert_eq!(
            food.restaurant,
            Some(Restaurant {
                name: "Taco Town".into(),
                logo: "tt.png".into(),
                status: RestaurantStatus::OpenNow,
            })
        );
    }

    #[test]
    fn flat_keys_win_over_nested_object() {
        let food = norm(json!({
            "restaurant_logo": "flat.png",
            "restaurant": { "name": "Nested", "logo": "nested.png" }
        }));
        let restaurant = food.restaurant.unwrap();
        assert_eq!(restaurant.logo, "flat.png");
        assert_eq!(restaurant.name, "Nested");
        assert_eq!(restaurant.status, RestaurantStatus::Closed);
    }

    // ── Price ───────────────────────────────────────────────────────

    #[test]
    fn price_is_prefixed() {
        assert_eq!(norm(json!({ "price": "12.50" })).price, "$12.50");
        assert_eq!(norm(json!({ "Price": "$3.00", "price": "9" })).price, "$3.00");
        assert_eq!(norm(json!({ "Price": "", "price": "9" })).price, "$9");
        assert_eq!(norm(json!({ "price": 4.25 })).price, "$4.25");
        assert_eq!(norm(json!({})).price, "$0.00");
    }

    // ── Determinism / idempotence ───────────────────────────────────

    #[test]
    fn same_input_same_output() {
        let input = raw(json!({ "food_name": "Soup", "food_rating": "3.3", "avatar": "s.png" }));
        assert_eq!(normalize(&input), normalize(&input));
    }

    #[test]
    fn normalizing_canonical_output_is_idempotent() {
        let inputs = [
            json!({}),
            json!({ "id": "1", "food_name": "Burger", "food_rating": 9, "Price": "7" }),
            json!({ "id": 2, "name": "Salad", "rating": 6, "avatar": "a.png" }),
            json!({
                "id": "3",
                "name": "Pho",
                "rating": "4.2",
                "restaurantName": "Saigon",
                "status": "Open"
            }),
            json!({ "id": "4", "restaurant_logo": "l.png", "restaurant_status": "busy" }),
        ];
        for input in inputs {
            let first = norm(input.clone());
            let second = normalize(&RawFood::from(&first));
            assert_eq!(first, second, "not idempotent for {input}");
        }
    }
}
