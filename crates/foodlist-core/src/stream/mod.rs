// ── Reactive view streams ──
//
// Subscription types for following `ListViewState` changes from the
// controller.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::ListViewState;

/// A subscription to the list view.
///
/// Offers the snapshot taken at subscription time, the latest snapshot on
/// demand, and change notification through [`changed`](Self::changed) or by
/// converting into a `Stream`.
pub struct ViewStream {
    current: ListViewState,
    receiver: watch::Receiver<ListViewState>,
}

impl ViewStream {
    pub(crate) fn new(receiver: watch::Receiver<ListViewState>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Snapshot as of creation, or as of the last [`changed`](Self::changed).
    pub fn current(&self) -> &ListViewState {
        &self.current
    }

    pub fn latest(&self) -> ListViewState {
        self.receiver.borrow().clone()
    }

    /// Wait for the next transition and return the new snapshot.
    /// Returns `None` once the controller has been dropped.
    pub async fn changed(&mut self) -> Option<ListViewState> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    pub fn into_stream(self) -> ViewWatchStream {
        ViewWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter over the view channel.
///
/// Yields the current snapshot first, then one per transition.
pub struct ViewWatchStream {
    inner: WatchStream<ListViewState>,
}

impl Stream for ViewWatchStream {
    type Item = ListViewState;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
