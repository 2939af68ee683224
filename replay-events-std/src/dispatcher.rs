//! # Dispatcher
//!
//! Routes an ordered sequence of entries to the handlers subscribed to them.
//!
//! For every entry, in input order, the dispatcher invokes each handler
//! registered under the entry's kind (in registration order) and then each
//! wildcard handler (in registration order):
//!
//! ```text
//! for entry in entries:
//!     for h in registry[entry.tag]:  h(entry)
//!     for h in registry[ANY]:        h(entry)
//! ```
//!
//! Entries whose tag names no [`EntryKind`] reach only the wildcard handlers.
//! A dispatcher with no subscribers returns without touching the input.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.subscribe(EntryKind::Chat, |entry: &Entry| println!("{entry}"));
//! dispatcher.dispatch(&entries)?;
//! ```

use crate::{config::FailurePolicy, registry::Registry};
use replay_events_core::{
    Decoder, DispatchError, Entry, EntryKind, Handler, HandlerFailure, Message, ParseError,
    Tagged,
};
use std::borrow::Borrow;

/// Summary of a successful dispatch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delivered {
    /// Entries walked through the registry.
    pub entries: usize,
    /// Handler invocations made.
    pub invocations: usize,
}

/// An owned subscription registry and the pass that drives entries through it.
///
/// Each dispatcher owns its registry; independent dispatchers never observe
/// each other's subscriptions.
pub struct Dispatcher<E: Message = Entry> {
    registry: Registry<E>,
    policy: FailurePolicy,
}

impl<E: Tagged> Dispatcher<E> {
    /// Create an empty dispatcher that aborts on the first handler failure.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    /// Create an empty dispatcher with the given failure policy.
    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            registry: Registry::new(),
            policy,
        }
    }

    /// The configured failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Register `handler` under `kind` and hand it back unchanged.
    ///
    /// [`EntryKind::Any`] registers a wildcard handler. The registry keeps its
    /// own clone, so the returned value can be registered again elsewhere;
    /// every registration is invoked independently.
    ///
    /// Handlers must be `Clone`. Closures and the wrappers in
    /// [`handlers`](crate::handlers) usually are. A handler that owns its state
    /// directly (a `Mutex<Vec<_>>` field, say) should be wrapped in
    /// [`SharedHandler`](replay_events_core::SharedHandler): clones then share
    /// one instance, and the returned value observes what the registered
    /// copies did.
    pub fn subscribe<H>(&mut self, kind: EntryKind, handler: H) -> H
    where
        H: Handler<E> + Clone,
    {
        self.registry.insert(kind, Box::new(handler.clone()));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = %kind,
            handler = std::any::type_name::<H>(),
            registered = self.registry.count(kind),
            "subscribed handler"
        );

        handler
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no handler has been registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of registrations under `kind`.
    pub fn handler_count(&self, kind: EntryKind) -> usize {
        self.registry.count(kind)
    }

    /// Drive `entries` through the registered handlers.
    ///
    /// Entries are processed in iteration order. On failure the outcome
    /// depends on the [`FailurePolicy`]: `Abort` returns the first failure
    /// immediately and delivers nothing further, `Isolate` finishes the pass
    /// and returns every failure together.
    pub fn dispatch<I>(&self, entries: I) -> Result<Delivered, DispatchError>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut delivered = Delivered::default();

        if self.registry.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!("no subscribers; skipping dispatch");
            return Ok(delivered);
        }

        let mut failures = Vec::new();

        for (index, item) in entries.into_iter().enumerate() {
            let entry = item.borrow();
            let tag = entry.tag();

            #[cfg(feature = "tracing")]
            tracing::trace!(index, tag, "dispatching entry");

            for handler in self.registry.resolve(tag) {
                delivered.invocations += 1;

                if let Err(error) = handler.handle(entry) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(index, tag, %error, policy = ?self.policy, "handler failed");

                    let failure = HandlerFailure {
                        index,
                        tag: tag.to_owned(),
                        error,
                    };
                    match self.policy {
                        FailurePolicy::Abort => return Err(failure.into()),
                        FailurePolicy::Isolate => failures.push(failure),
                    }
                }
            }

            delivered.entries += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = delivered.entries,
            invocations = delivered.invocations,
            failures = failures.len(),
            "dispatch complete"
        );

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(DispatchError::Isolated(failures))
        }
    }

    /// Decode a capture with `decoder`, then dispatch the resulting entries.
    ///
    /// Decoding always runs, even with no subscribers, so a malformed capture
    /// is reported either way. The decoder's error is returned as-is inside
    /// [`ParseError::Decode`].
    pub fn parse<D>(&self, decoder: &D, raw: &[u8]) -> Result<Delivered, ParseError<D::Error>>
    where
        D: Decoder<Entry = E>,
    {
        let entries = decoder.decode(raw).map_err(ParseError::Decode)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = raw.len(), entries = entries.len(), "decoded capture");

        Ok(self.dispatch(&entries)?)
    }
}

impl<E: Tagged> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Message> std::fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registrations", &self.registry.len())
            .field("policy", &self.policy)
            .finish()
    }
}
