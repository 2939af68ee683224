//! # Shared Handler Wrapper
//!
//! Provides `SharedHandler<H>` for O(1) cloning of a handler via `Arc`.
//!
//! Registering a `SharedHandler` several times stores several pointers to the
//! same instance, so state kept inside the handler is shared between the
//! registrations and [`SharedHandler::ptr_eq`] can tell that a value handed
//! back by `subscribe` is the one that was passed in.
//!
//! # Example
//!
//! ```rust,ignore
//! let counter = SharedHandler::new(CountingHandler::new());
//! let same = dispatcher.subscribe(EntryKind::Chat, counter.clone());
//! assert!(SharedHandler::ptr_eq(&counter, &same));
//! ```

use crate::{error::BoxError, handler::Handler, message::Message};
use std::{ops::Deref, sync::Arc};

/// A shared, reference-counted handler.
#[derive(Debug, Default)]
pub struct SharedHandler<H>(Arc<H>);

impl<H> SharedHandler<H> {
    /// Wrap a handler.
    pub fn new(handler: H) -> Self {
        Self(Arc::new(handler))
    }

    /// Get a reference to the inner handler.
    pub fn inner(&self) -> &H {
        &self.0
    }

    /// Returns the number of live references, registrations included.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Whether two wrappers point at the same handler instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<H> Clone for SharedHandler<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H> Deref for SharedHandler<H> {
    type Target = H;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<H> From<Arc<H>> for SharedHandler<H> {
    fn from(handler: Arc<H>) -> Self {
        Self(handler)
    }
}

impl<E, H> Handler<E> for SharedHandler<H>
where
    E: Message,
    H: Handler<E>,
{
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        self.0.handle(entry)
    }
}
