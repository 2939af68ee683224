//! Testing utilities for replay-events.
//!
//! Handlers and decoders that make dispatch behavior observable in tests.
//!
//! - [`Journal`]: a shared, ordered log of invocations across many handlers
//! - [`RecordingHandler`]: a handler that writes to a [`Journal`]
//! - [`CountingHandler`]: a handler that counts invocations
//! - [`FailingHandler`]: a handler that fails, optionally only for one tag
//! - [`StaticDecoder`]: a decoder that returns fixed entries or a fixed error

use replay_events_core::{BoxError, Decoder, Handler, Message, Tagged};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Journal / Recording Handler
// ============================================================================

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call<E> {
    /// Name of the handler that was invoked.
    pub handler: &'static str,
    /// The entry it received.
    pub entry: E,
}

/// An ordered log of handler invocations shared by several recorders.
///
/// # Example
///
/// ```rust,ignore
/// let journal = Journal::new();
/// dispatcher.subscribe(EntryKind::Chat, journal.recorder("h1"));
/// dispatcher.subscribe(EntryKind::Any, journal.recorder("h2"));
/// dispatcher.dispatch(&entries)?;
///
/// assert_eq!(journal.handlers(), ["h1", "h2", "h2"]);
/// ```
pub struct Journal<E> {
    calls: Arc<Mutex<Vec<Call<E>>>>,
}

impl<E: Clone> Journal<E> {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler that records into this journal under `name`.
    pub fn recorder(&self, name: &'static str) -> RecordingHandler<E> {
        RecordingHandler {
            name,
            calls: self.calls.clone(),
        }
    }

    /// Every recorded call, in invocation order.
    pub fn calls(&self) -> Vec<Call<E>> {
        lock(&self.calls).clone()
    }

    /// Handler names, in invocation order.
    pub fn handlers(&self) -> Vec<&'static str> {
        lock(&self.calls).iter().map(|c| c.handler).collect()
    }

    /// Entries received by the handler named `name`, in invocation order.
    pub fn entries_for(&self, name: &str) -> Vec<E> {
        lock(&self.calls)
            .iter()
            .filter(|c| c.handler == name)
            .map(|c| c.entry.clone())
            .collect()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        lock(&self.calls).is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

impl<E: Clone> Default for Journal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Journal<E> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

/// A handler that records a clone of every entry it receives.
///
/// Clones share the same journal, so a recorder registered several times
/// appears once per registration.
pub struct RecordingHandler<E> {
    name: &'static str,
    calls: Arc<Mutex<Vec<Call<E>>>>,
}

impl<E> RecordingHandler<E> {
    /// The name this recorder writes under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether two recorders are the same name writing into the same journal.
    pub fn same_as(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.calls, &other.calls)
    }
}

impl<E> Clone for RecordingHandler<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            calls: self.calls.clone(),
        }
    }
}

impl<E: Message + Clone> Handler<E> for RecordingHandler<E> {
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        lock(&self.calls).push(Call {
            handler: self.name,
            entry: entry.clone(),
        });
        Ok(())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// dispatcher.subscribe(EntryKind::Death, counter.clone());
/// dispatcher.dispatch(&entries)?;
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Message> Handler<E> for CountingHandler {
    fn handle(&self, _entry: &E) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// Error produced by [`FailingHandler`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InjectedFailure(pub String);

/// A handler that fails, either on every entry or only on one tag.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
    only_tag: Option<String>,
    attempts: Arc<AtomicUsize>,
}

impl FailingHandler {
    /// Fail on every entry with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            only_tag: None,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fail only on entries tagged `tag`; succeed otherwise.
    pub fn on_tag(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            only_tag: Some(tag.into()),
            ..Self::new(message)
        }
    }

    /// Number of times this handler (or a clone) was invoked.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl<E: Tagged> Handler<E> for FailingHandler {
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match &self.only_tag {
            Some(tag) if tag != entry.tag() => Ok(()),
            _ => Err(Box::new(InjectedFailure(self.message.clone()))),
        }
    }
}

// ============================================================================
// Static Decoder
// ============================================================================

/// Error produced by a failing [`StaticDecoder`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed capture: {0}")]
pub struct MalformedCapture(pub String);

/// A decoder that ignores its input and returns a fixed outcome.
#[derive(Debug, Clone)]
pub struct StaticDecoder<E> {
    outcome: Result<Vec<E>, MalformedCapture>,
    calls: Arc<AtomicUsize>,
}

impl<E> StaticDecoder<E> {
    /// Always decode to `entries`.
    pub fn new(entries: Vec<E>) -> Self {
        Self {
            outcome: Ok(entries),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(MalformedCapture(reason.into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `decode` calls made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: Tagged + Clone> Decoder for StaticDecoder<E> {
    type Entry = E;
    type Error = MalformedCapture;

    fn decode(&self, _raw: &[u8]) -> Result<Vec<E>, MalformedCapture> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
