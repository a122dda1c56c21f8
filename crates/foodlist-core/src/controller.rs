// ── List controller ──
//
// Owns the catalog list state. Loads the whole collection, filters it
// client-side by name, pages it out in fixed steps, and reloads after
// every mutation. All transitions go through the `ViewStore`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use foodlist_api::{FoodClient, TransportConfig};

use crate::backend::FoodBackend;
use crate::command::Mutation;
use crate::config::{CatalogConfig, DEFAULT_PAGE_SIZE};
use crate::error::CoreError;
use crate::model::{Food, FoodId};
use crate::store::{ListViewState, ViewStore};
use crate::stream::ViewStream;

// ── ListController ───────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable; clones share the same state and backend. Reads are
/// snapshots of [`ListViewState`], writes go through [`load`](Self::load),
/// [`show_more`](Self::show_more) and [`mutate`](Self::mutate).
pub struct ListController<B> {
    inner: Arc<ControllerInner<B>>,
}

impl<B> Clone for ListController<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ControllerInner<B> {
    backend: B,
    store: ViewStore,
}

impl ListController<FoodClient> {
    /// Build a controller backed by the HTTP client described by `config`.
    ///
    /// Does not touch the network; call [`load`](Self::load) for the first
    /// fetch.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = FoodClient::new(config.url.as_str(), &config.collection, &transport)
            .map_err(|e| CoreError::Config {
                message: e.to_string(),
            })?;
        debug!(
            url = %client.base_url(),
            collection = client.collection(),
            "catalog client ready"
        );
        Ok(Self::with_page_size(client, config.page_size))
    }
}

impl<B: FoodBackend> ListController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_page_size(backend, DEFAULT_PAGE_SIZE)
    }

    /// A `page_size` of zero is treated as one.
    pub fn with_page_size(backend: B, page_size: usize) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                backend,
                store: ViewStore::new(page_size.max(1)),
            }),
        }
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    pub fn page_size(&self) -> usize {
        self.inner.store.page_size()
    }

    // ── Reads ────────────────────────────────────────────────────

    pub fn snapshot(&self) -> ListViewState {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> ViewStream {
        ViewStream::new(self.inner.store.subscribe())
    }

    /// Look up a record among the loaded (filtered) items.
    pub fn find(&self, id: &FoodId) -> Option<Food> {
        self.inner
            .store
            .snapshot()
            .items()
            .iter()
            .find(|food| &food.id == id)
            .cloned()
    }

    // ── Loading ──────────────────────────────────────────────────

    /// Fetch the whole collection and replace the list.
    ///
    /// `Some(term)` replaces the stored search term; `None` reuses it. On
    /// failure the previous items are kept and `error` is set. A response
    /// that arrives after a newer load was issued is dropped without
    /// touching the state.
    pub async fn load(&self, search: Option<&str>) -> Result<(), CoreError> {
        let (seq, term) = self.inner.store.begin_load(search);
        debug!(seq, term = %term, "loading catalog");

        match self.inner.backend.fetch_all().await {
            Ok(raw) => {
                let fetched = raw.len();
                let items = filter_by_name(raw.iter().map(Food::from).collect(), &term);
                let matched = items.len();
                if self.inner.store.apply_items(seq, items) {
                    info!(fetched, matched, "catalog loaded");
                } else {
                    debug!(seq, "discarding stale load response");
                }
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from_fetch(e);
                if !self.inner.store.apply_failure(seq, err.to_string()) {
                    debug!(seq, error = %err, "discarding stale load failure");
                    return Ok(());
                }
                warn!(error = %err, "catalog load failed");
                Err(err)
            }
        }
    }

    /// Replace the search term and reload against the full collection.
    pub async fn apply_search(&self, term: &str) -> Result<(), CoreError> {
        self.load(Some(term)).await
    }

    /// Reveal the next page of already-loaded items.
    pub fn show_more(&self) {
        self.inner.store.show_more();
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Send a create, update, or delete, then reload with the current term.
    ///
    /// A transport failure aborts without reloading; its message is stored
    /// in `error` and returned.
    pub async fn mutate(&self, mutation: Mutation) -> Result<(), CoreError> {
        let kind = mutation.kind();
        let backend = &self.inner.backend;
        let result = match &mutation {
            Mutation::Create(payload) => backend.create(payload).await.map(drop),
            Mutation::Update { id, payload } => backend.update(id, payload).await.map(drop),
            Mutation::Delete { id } => backend.remove(id).await,
        };

        if let Err(e) = result {
            let err = CoreError::from_mutation(kind, &e);
            warn!(%kind, target = ?mutation.target(), error = %e, "mutation failed");
            self.inner.store.set_error(err.to_string());
            return Err(err);
        }

        info!(%kind, target = ?mutation.target(), "mutation applied");
        self.load(None).await
    }
}

/// Keep records whose name contains `term`, ignoring case and surrounding
/// whitespace. A blank term keeps everything.
fn filter_by_name(items: Vec<Food>, term: &str) -> Vec<Food> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|food| food.name_contains(&needle))
        .collect()
}
