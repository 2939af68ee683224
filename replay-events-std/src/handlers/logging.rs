//! Logging Handler - Observability for dispatched entries.

use replay_events_core::{BoxError, Handler, Tagged};
use std::fmt::Debug;

/// A handler that logs every entry it receives.
///
/// Subscribe it under [`EntryKind::Any`] to trace the whole stream, or under
/// a single kind to watch one category. It never fails.
///
/// # Example
///
/// ```rust,ignore
/// dispatcher.subscribe(EntryKind::Any, LoggingHandler::named("replay"));
/// ```
///
/// [`EntryKind::Any`]: replay_events_core::EntryKind::Any
#[derive(Debug, Clone, Copy)]
pub struct LoggingHandler {
    name: &'static str,
}

impl LoggingHandler {
    /// Create a new `LoggingHandler` with a default name.
    pub fn new() -> Self {
        Self { name: "entry" }
    }

    /// Create a new `LoggingHandler` with a custom name.
    ///
    /// The name is used in log records to identify the subscription.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log records.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Handler<E> for LoggingHandler
where
    E: Tagged + Debug,
{
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, tag = %entry.tag(), ?entry, "entry");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, entry);
        }

        Ok(())
    }
}
