// ── List view snapshot ──

use std::sync::Arc;

use serde::Serialize;

use crate::model::Food;

/// Everything the presentation layer needs to draw the catalog list.
///
/// Published by the controller as an immutable snapshot. Cloning is cheap:
/// `items` sits behind an `Arc` and is replaced wholesale on every load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListViewState {
    pub(crate) items: Arc<Vec<Food>>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) search_term: String,
    pub(crate) visible_count: usize,
}

impl ListViewState {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            items: Arc::new(Vec::new()),
            loading: false,
            error: None,
            search_term: String::new(),
            visible_count: page_size,
        }
    }

    /// Filtered items from the last successful load, in upstream order.
    pub fn items(&self) -> &Arc<Vec<Food>> {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed operation, cleared when a load starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// The window currently shown: `items[0..visible_count]`.
    pub fn visible_items(&self) -> &[Food] {
        let end = self.visible_count.min(self.items.len());
        self.items.get(..end).unwrap_or_default()
    }

    /// `true` while items exist beyond the visible window.
    pub fn has_more(&self) -> bool {
        self.items.len() > self.visible_count
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }
}
