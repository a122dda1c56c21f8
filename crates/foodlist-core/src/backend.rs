// ── Transport seam ──
//
// The controller talks to the collection only through `FoodBackend`, so
// the HTTP client can be swapped for an in-memory double in tests.

use std::future::Future;

use foodlist_api::{Error, FoodClient, FoodPayload, RawFood};

use crate::model::FoodId;

/// The four collection operations the list controller needs.
///
/// Any failure is reported as a `foodlist_api::Error`; the controller
/// translates it into a `CoreError` with an operation-specific message.
pub trait FoodBackend: Send + Sync {
    /// Every record in the collection, unfiltered.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<RawFood>, Error>> + Send;

    fn create(&self, payload: &FoodPayload)
    -> impl Future<Output = Result<RawFood, Error>> + Send;

    fn update(
        &self,
        id: &FoodId,
        payload: &FoodPayload,
    ) -> impl Future<Output = Result<RawFood, Error>> + Send;

    fn remove(&self, id: &FoodId) -> impl Future<Output = Result<(), Error>> + Send;
}

impl FoodBackend for FoodClient {
    async fn fetch_all(&self) -> Result<Vec<RawFood>, Error> {
        self.list_foods().await
    }

    async fn create(&self, payload: &FoodPayload) -> Result<RawFood, Error> {
        self.create_food(payload).await
    }

    async fn update(&self, id: &FoodId, payload: &FoodPayload) -> Result<RawFood, Error> {
        self.update_food(id.as_str(), payload).await
    }

    async fn remove(&self, id: &FoodId) -> Result<(), Error> {
        self.delete_food(id.as_str()).await
    }
}
