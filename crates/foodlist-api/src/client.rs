// Async HTTP client for the food catalog collection.
//
// Collection path: /{collection} (default "Food")
// Item path:       /{collection}/{id}

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ErrorBody, FoodPayload, RawFood};
use crate::transport::TransportConfig;

/// Collection name used by the public mock deployment.
pub const DEFAULT_COLLECTION: &str = "Food";

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the `/Food` REST collection.
///
/// Stateless apart from the pooled `reqwest::Client`; cheap to share by
/// reference across tasks.
#[derive(Debug, Clone)]
pub struct FoodClient {
    http: reqwest::Client,
    base_url: Url,
    collection: String,
}

impl FoodClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a base URL, collection name, and transport config.
    pub fn new(base_url: &str, collection: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, collection, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        base_url: &str,
        collection: &str,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        let collection = collection.trim_matches('/').to_owned();
        Ok(Self {
            http,
            base_url,
            collection,
        })
    }

    /// Ensure the base URL ends with `/` so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The collection name requests are sent to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn collection_url(&self) -> Result<Url, Error> {
        Ok(self.base_url.join(&self.collection)?)
    }

    fn item_url(&self, id: &str) -> Result<Url, Error> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(id);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body: body.clone(),
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let reason = status.canonical_reason().map(String::from);
        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorBody>(&raw) {
            Ok(body) => body.message.or(body.error),
            Err(_) if raw.trim().is_empty() => None,
            // mockapi answers unknown ids with a bare JSON string
            Err(_) => serde_json::from_str::<String>(&raw).ok(),
        };

        Error::Api {
            status: status.as_u16(),
            reason,
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch every record in the collection.
    ///
    /// `GET /{collection}`. Elements that are not JSON objects are kept as
    /// empty records so one bad row cannot fail the whole listing.
    pub async fn list_foods(&self) -> Result<Vec<RawFood>, Error> {
        let url = self.collection_url()?;
        let items: Vec<Value> = self.get(url).await?;
        debug!(count = items.len(), "fetched raw records");
        Ok(items.into_iter().map(RawFood::from_value).collect())
    }

    /// Create a record. `POST /{collection}`
    pub async fn create_food(&self, payload: &FoodPayload) -> Result<RawFood, Error> {
        let url = self.collection_url()?;
        debug!(name = %payload.name, "creating food");
        let created: Value = self.post(url, payload).await?;
        Ok(RawFood::from_value(created))
    }

    /// Replace a record. `PUT /{collection}/{id}`
    pub async fn update_food(&self, id: &str, payload: &FoodPayload) -> Result<RawFood, Error> {
        let url = self.item_url(id)?;
        debug!(id, "updating food");
        let updated: Value = self.put(url, payload).await?;
        Ok(RawFood::from_value(updated))
    }

    /// Delete a record. `DELETE /{collection}/{id}`
    ///
    /// The response body is ignored; some deployments echo the deleted
    /// record, others return nothing.
    pub async fn delete_food(&self, id: &str) -> Result<(), Error> {
        let url = self.item_url(id)?;
        debug!(id, "deleting food");
        self.delete(url).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> FoodClient {
        FoodClient::from_reqwest(base, DEFAULT_COLLECTION, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let c = client("https://example.mockapi.io/api/v1");
        assert_eq!(c.base_url().as_str(), "https://example.mockapi.io/api/v1/");
    }

    #[test]
    fn collection_and_item_urls() {
        let c = client("https://example.mockapi.io/");
        assert_eq!(
            c.collection_url().unwrap().as_str(),
            "https://example.mockapi.io/Food"
        );
        assert_eq!(
            c.item_url("42").unwrap().as_str(),
            "https://example.mockapi.io/Food/42"
        );
    }

    #[test]
    fn item_ids_are_path_escaped() {
        let c = client("https://example.mockapi.io");
        assert_eq!(
            c.item_url("a/b c").unwrap().as_str(),
            "https://example.mockapi.io/Food/a%2Fb%20c"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = FoodClient::from_reqwest("not a url", DEFAULT_COLLECTION, reqwest::Client::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
