// ── Runtime catalog configuration ──
//
// Describes *where* the collection lives and how the list pages. Never
// touches disk: the CLI (via foodlist-config) builds a `CatalogConfig`
// and hands it in.

use std::time::Duration;

use url::Url;

/// Public mock deployment the catalog was built against.
pub const DEFAULT_API_URL: &str = "https://6852821e0594059b23cdd834.mockapi.io";

/// Items revealed per "show more" step, and the initial window after a load.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Configuration for one catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the REST service (e.g. `https://xyz.mockapi.io`).
    pub url: Url,
    /// Collection path segment under `url` (defaults to `Food`).
    pub collection: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Pagination step; values below 1 are treated as 1.
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            collection: foodlist_api::DEFAULT_COLLECTION.into(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
