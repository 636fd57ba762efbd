//! Cancellable asynchronous traversal of a sorted container.
//!
//! [`SortedContainer::for_each_async`] visits every element in ascending
//! order, awaiting the visitor's future for each one and yielding to the
//! scheduler between visits, so a long traversal never monopolizes the
//! executor thread.
//!
//! # Snapshot Semantics
//!
//! The traversal works on a snapshot taken when it is created. The container
//! can be mutated or dropped while the traversal runs; the visitor keeps
//! seeing the elements as they were.
//!
//! # Cancellation
//!
//! [`AsyncTraversal::handle`] returns a [`TraversalHandle`] that can stop the
//! traversal from anywhere. The traversal observes cancellation at its next
//! suspension point and resolves to [`TraversalError::Cancelled`]. Dropping
//! the future stops it as well.
//!
//! # Examples
//!
//! ```rust
//! use sorted_container::container::SortedContainer;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let container = SortedContainer::from_values([3, 1, 2]);
//! let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
//!
//! let visited = container
//!     .for_each_async(move |element, index, _| {
//!         let sender = sender.clone();
//!         async move {
//!             let _ = sender.send((index, element));
//!         }
//!     })
//!     .await;
//!
//! assert_eq!(visited, Ok(3));
//! assert_eq!(receiver.recv().await, Some((0, 1)));
//! # });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};

use futures::future::{AbortHandle, Abortable};
use pin_project_lite::pin_project;

use crate::container::SortedContainer;
use crate::numeric::Numeric;

type VisitFuture = Pin<Box<dyn Future<Output = usize> + Send>>;

/// Error produced when an asynchronous traversal does not run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// The traversal was cancelled through a [`TraversalHandle`].
    Cancelled {
        /// Number of elements whose visit completed before cancellation.
        visited: usize,
    },
}

impl std::fmt::Display for TraversalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled { visited } => {
                write!(formatter, "traversal cancelled after {visited} element(s)")
            }
        }
    }
}

impl std::error::Error for TraversalError {}

/// Handle for cancelling and observing an [`AsyncTraversal`].
///
/// Handles are cheap to clone and may be sent to other tasks.
#[derive(Debug, Clone)]
pub struct TraversalHandle {
    abort_handle: AbortHandle,
    visited: Arc<AtomicUsize>,
}

impl TraversalHandle {
    /// Requests cancellation. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        self.abort_handle.abort();
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort_handle.is_aborted()
    }

    /// Number of elements visited so far.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.visited.load(Ordering::Acquire)
    }
}

pin_project! {
    /// A lazy, cancellable traversal over a snapshot of a sorted container.
    ///
    /// Resolves to `Ok(n)` with the number of visited elements, or to
    /// [`TraversalError::Cancelled`] if its handle was used to stop it.
    /// Nothing runs until the future is polled.
    #[must_use = "traversals do nothing unless awaited or spawned"]
    pub struct AsyncTraversal {
        #[pin]
        inner: Abortable<VisitFuture>,
        handle: TraversalHandle,
    }
}

impl AsyncTraversal {
    /// Returns a handle that can cancel this traversal.
    #[must_use]
    pub fn handle(&self) -> TraversalHandle {
        self.handle.clone()
    }
}

impl Future for AsyncTraversal {
    type Output = Result<usize, TraversalError>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.inner.poll(context) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(visited)) => {
                log::debug!("traversal completed after {visited} element(s)");
                Poll::Ready(Ok(visited))
            }
            Poll::Ready(Err(_aborted)) => {
                let visited = this.handle.visited();
                log::debug!("traversal cancelled after {visited} element(s)");
                Poll::Ready(Err(TraversalError::Cancelled { visited }))
            }
        }
    }
}

impl<T: Numeric> SortedContainer<T> {
    /// Visits every element asynchronously, in ascending order.
    ///
    /// `visitor(element, index, snapshot)` is called once per element and its
    /// future is awaited before the next element is visited. The traversal
    /// yields to the scheduler after each visit.
    ///
    /// The returned [`AsyncTraversal`] owns a snapshot of the elements, so it
    /// does not borrow the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    /// use sorted_container::traversal::TraversalError;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let container = SortedContainer::from_values(1..=10);
    /// let traversal = container.for_each_async(|_, _, _| async {});
    ///
    /// traversal.handle().cancel();
    /// assert_eq!(traversal.await, Err(TraversalError::Cancelled { visited: 0 }));
    /// # });
    /// ```
    pub fn for_each_async<F, Fut>(&self, mut visitor: F) -> AsyncTraversal
    where
        F: FnMut(T, usize, Arc<[T]>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let snapshot: Arc<[T]> = Arc::from(self.as_slice());
        let visited = Arc::new(AtomicUsize::new(0));
        let (abort_handle, registration) = AbortHandle::new_pair();

        log::debug!("traversal created over {} element(s)", snapshot.len());

        let counter = Arc::clone(&visited);
        let visits: VisitFuture = Box::pin(async move {
            for (index, element) in snapshot.iter().copied().enumerate() {
                visitor(element, index, Arc::clone(&snapshot)).await;
                counter.fetch_add(1, Ordering::AcqRel);
                tokio::task::yield_now().await;
            }
            snapshot.len()
        });

        AsyncTraversal {
            inner: Abortable::new(visits, registration),
            handle: TraversalHandle {
                abort_handle,
                visited,
            },
        }
    }
}

static_assertions::assert_impl_all!(AsyncTraversal: Send);
static_assertions::assert_impl_all!(TraversalHandle: Send, Sync, Clone);
