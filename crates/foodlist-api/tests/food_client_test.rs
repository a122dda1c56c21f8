#![allow(clippy::unwrap_used)]
// Integration tests for `FoodClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use foodlist_api::{Error, FoodClient, FoodPayload, RestaurantPayload, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, FoodClient) {
    let server = MockServer::start().await;
    let client = FoodClient::new(&server.uri(), "Food", &TransportConfig::default()).unwrap();
    (server, client)
}

fn sample_payload() -> FoodPayload {
    FoodPayload {
        name: "Pepperoni Pizza".into(),
        rating: 4.5,
        image: "https://img.example/pizza.png".into(),
        restaurant: RestaurantPayload {
            name: "Pizza Hub".into(),
            logo: "https://img.example/hub.png".into(),
            status: "Open Now".into(),
        },
    }
}

// ── Listing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_foods() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "createdAt": "2024-06-15T10:30:00Z",
                "food_name": "Burger",
                "food_rating": "4",
                "restaurantName": "Grill House",
                "Price": "12.50"
            },
            {
                "id": 2,
                "name": "Salad",
                "avatar": "https://img.example/salad.png",
                "rating": 3
            }
        ])))
        .mount(&server)
        .await;

    let foods = client.list_foods().await.unwrap();

    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0].food_name, Some(json!("Burger")));
    assert_eq!(foods[0].restaurant_name_camel, Some(json!("Grill House")));
    assert_eq!(foods[0].price_capitalized, Some(json!("12.50")));
    assert_eq!(foods[1].id, Some(json!(2)));
    assert_eq!(foods[1].avatar, Some(json!("https://img.example/salad.png")));
}

#[tokio::test]
async fn test_list_foods_tolerates_non_object_rows() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "garbage",
            null,
            { "id": "3", "name": "Soup" }
        ])))
        .mount(&server)
        .await;

    let foods = client.list_foods().await.unwrap();
    assert_eq!(foods.len(), 3);
    assert_eq!(foods[0].id, None);
    assert_eq!(foods[1].id, None);
    assert_eq!(foods[2].name, Some(json!("Soup")));
}

#[tokio::test]
async fn test_list_foods_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.list_foods().await.unwrap_err();
    match err {
        Error::Api {
            status,
            reason,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(reason.as_deref(), Some("Internal Server Error"));
            assert_eq!(message, None);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_foods_rejects_non_array_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.list_foods().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on the discard port in the test environment.
    let client =
        FoodClient::new("http://127.0.0.1:9", "Food", &TransportConfig::default()).unwrap();

    let err = client.list_foods().await.unwrap_err();
    assert!(err.is_network(), "expected network error, got: {err:?}");
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let transport = TransportConfig::default().with_timeout(Duration::from_millis(200));
    let client = FoodClient::new(&server.uri(), "Food", &transport).unwrap();

    let err = client.list_foods().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {err:?}");
    assert!(err.is_network());
    assert_eq!(err.status(), None);
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_food_posts_nested_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/Food"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Pepperoni Pizza",
            "rating": 4.5,
            "image": "https://img.example/pizza.png",
            "restaurant": {
                "name": "Pizza Hub",
                "logo": "https://img.example/hub.png",
                "status": "Open Now"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "99",
            "name": "Pepperoni Pizza",
            "rating": 4.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_food(&sample_payload()).await.unwrap();
    assert_eq!(created.id, Some(json!("99")));
}

#[tokio::test]
async fn test_create_food_surfaces_server_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/Food"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "rating is invalid" })),
        )
        .mount(&server)
        .await;

    let err = client.create_food(&sample_payload()).await.unwrap_err();
    assert_eq!(err.server_message(), Some("rating is invalid"));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_update_food() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/Food/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "12",
            "name": "Pepperoni Pizza"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client.update_food("12", &sample_payload()).await.unwrap();
    assert_eq!(updated.name, Some(json!("Pepperoni Pizza")));
}

#[tokio::test]
async fn test_update_missing_food_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/Food/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!("Not found")))
        .mount(&server)
        .await;

    let err = client.update_food("404", &sample_payload()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("Not found"));
}

#[tokio::test]
async fn test_delete_food_with_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/Food/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_food("5").await.unwrap();
}

#[tokio::test]
async fn test_collection_name_is_configurable() {
    let server = MockServer::start().await;
    let client = FoodClient::new(
        &format!("{}/api/v1/", server.uri()),
        "Meals",
        &TransportConfig::default(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/Meals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.list_foods().await.unwrap().is_empty());
}
