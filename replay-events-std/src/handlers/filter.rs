//! Filter handler for conditional entry processing.

use replay_events_core::{BoxError, Handler, Message};

/// A handler that forwards only entries matching a predicate.
///
/// Entries rejected by the predicate count as handled successfully.
///
/// # Example
///
/// ```rust,ignore
/// // Only hero deaths
/// let deaths = FilterHandler::new(
///     |entry: &Entry| entry.targethero == Some(true),
///     DeathTracker::default(),
/// );
/// dispatcher.subscribe(EntryKind::Death, deaths);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FilterHandler<P, H> {
    predicate: P,
    inner: H,
}

impl<P, H> FilterHandler<P, H> {
    /// Create a new filter handler.
    pub fn new(predicate: P, inner: H) -> Self {
        Self { predicate, inner }
    }
}

impl<E, P, H> Handler<E> for FilterHandler<P, H>
where
    E: Message,
    P: Fn(&E) -> bool + Send + Sync + 'static,
    H: Handler<E>,
{
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        if (self.predicate)(entry) {
            self.inner.handle(entry)
        } else {
            Ok(())
        }
    }
}
