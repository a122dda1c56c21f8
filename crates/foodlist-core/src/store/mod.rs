// ── View state store ──
//
// Single owner of `ListViewState`. Every transition is one `send_modify`
// on a `watch` channel, so readers always observe a consistent snapshot
// and subscribers are woken on each change. The load sequence is bumped
// and compared only while the channel's write lock is held.

mod view_state;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::model::Food;

pub use view_state::ListViewState;

pub(crate) struct ViewStore {
    state: watch::Sender<ListViewState>,
    page_size: usize,
    /// Sequence number of the most recently issued load.
    load_seq: AtomicU64,
}

impl ViewStore {
    pub(crate) fn new(page_size: usize) -> Self {
        let (state, _) = watch::channel(ListViewState::new(page_size));
        Self {
            state,
            page_size,
            load_seq: AtomicU64::new(0),
        }
    }

    pub(crate) fn page_size(&self) -> usize {
        self.page_size
    }

    pub(crate) fn snapshot(&self) -> ListViewState {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ListViewState> {
        self.state.subscribe()
    }

    /// Mark a load as in flight.
    ///
    /// Returns the load's sequence number and the search term it filters
    /// by. A `Some` term replaces the stored one; `None` keeps it.
    pub(crate) fn begin_load(&self, search: Option<&str>) -> (u64, String) {
        let mut seq = 0;
        let mut term = String::new();
        self.state.send_modify(|s| {
            seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(search) = search {
                s.search_term = search.to_owned();
            }
            s.loading = true;
            s.error = None;
            term.clone_from(&s.search_term);
        });
        (seq, term)
    }

    fn is_current(&self, seq: u64) -> bool {
        self.load_seq.load(Ordering::SeqCst) == seq
    }

    /// Replace the collection after a successful load.
    ///
    /// Returns `false`, leaving the state alone, when a newer load was
    /// issued after `seq`.
    pub(crate) fn apply_items(&self, seq: u64, items: Vec<Food>) -> bool {
        let page_size = self.page_size;
        self.state.send_if_modified(|s| {
            if !self.is_current(seq) {
                return false;
            }
            s.items = Arc::new(items);
            s.visible_count = page_size;
            s.loading = false;
            s.error = None;
            true
        })
    }

    /// Record a failed load. Items stay as they were.
    ///
    /// Stale failures are dropped the same way as in
    /// [`apply_items`](Self::apply_items).
    pub(crate) fn apply_failure(&self, seq: u64, message: String) -> bool {
        self.state.send_if_modified(|s| {
            if !self.is_current(seq) {
                return false;
            }
            s.loading = false;
            s.error = Some(message);
            true
        })
    }

    /// Record a failed mutation without touching the load state.
    pub(crate) fn set_error(&self, message: String) {
        self.state.send_modify(|s| s.error = Some(message));
    }

    /// Grow the visible window by one page, never past the item count.
    pub(crate) fn show_more(&self) {
        let page_size = self.page_size;
        self.state.send_modify(|s| {
            s.visible_count = (s.visible_count + page_size).min(s.items.len());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FoodId;

    fn foods(n: usize) -> Vec<Food> {
        (0..n)
            .map(|i| Food {
                id: FoodId::from(i.to_string()),
                name: format!("Food {i}"),
                rating: 0.0,
                image: String::new(),
                restaurant: None,
                price: "$0.00".into(),
            })
            .collect()
    }

    #[test]
    fn initial_state() {
        let store = ViewStore::new(8);
        let snap = store.snapshot();
        assert!(!snap.loading());
        assert_eq!(snap.error(), None);
        assert_eq!(snap.visible_count(), 8);
        assert!(snap.visible_items().is_empty());
        assert!(!snap.has_more());
    }

    #[test]
    fn begin_load_keeps_term_unless_given() {
        let store = ViewStore::new(8);
        assert_eq!(store.begin_load(Some("pizza")), (1, "pizza".into()));
        assert_eq!(store.begin_load(None), (2, "pizza".into()));
        assert_eq!(store.begin_load(Some("")), (3, String::new()));
        assert!(store.snapshot().loading());
    }

    #[test]
    fn show_more_clamps_to_item_count() {
        let store = ViewStore::new(8);
        let (seq, _) = store.begin_load(None);
        store.apply_items(seq, foods(20));
        assert_eq!(store.snapshot().visible_count(), 8);
        assert!(store.snapshot().has_more());

        store.show_more();
        assert_eq!(store.snapshot().visible_count(), 16);
        store.show_more();
        assert_eq!(store.snapshot().visible_count(), 20);
        store.show_more();
        assert_eq!(store.snapshot().visible_count(), 20);
        assert!(!store.snapshot().has_more());
        assert_eq!(store.snapshot().visible_items().len(), 20);
    }

    #[test]
    fn short_lists_show_everything() {
        let store = ViewStore::new(8);
        let (seq, _) = store.begin_load(None);
        store.apply_items(seq, foods(3));
        let snap = store.snapshot();
        assert_eq!(snap.visible_items().len(), 3);
        assert!(!snap.has_more());
    }

    #[test]
    fn failure_keeps_items() {
        let store = ViewStore::new(8);
        let (seq, _) = store.begin_load(None);
        store.apply_items(seq, foods(2));
        let (seq, _) = store.begin_load(None);
        assert!(store.apply_failure(seq, "boom".into()));
        let snap = store.snapshot();
        assert_eq!(snap.total(), 2);
        assert_eq!(snap.error(), Some("boom"));
        assert!(!snap.loading());
    }

    #[test]
    fn superseded_results_leave_state_alone() {
        let store = ViewStore::new(8);
        let mut rx = store.subscribe();
        let (first, _) = store.begin_load(Some("pi"));
        let (second, _) = store.begin_load(Some("bur"));
        rx.borrow_and_update();

        assert!(!store.apply_items(first, foods(5)));
        assert!(!store.apply_failure(first, "late".into()));
        assert!(!rx.has_changed().unwrap_or(true));
        let snap = store.snapshot();
        assert!(snap.loading());
        assert_eq!(snap.total(), 0);
        assert_eq!(snap.error(), None);
        assert_eq!(snap.search_term(), "bur");

        assert!(store.apply_items(second, foods(2)));
        assert!(!store.snapshot().loading());
        assert_eq!(store.snapshot().total(), 2);
    }
}
