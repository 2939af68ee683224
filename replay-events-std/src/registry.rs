//! Subscriber registry keyed by entry kind.
//!
//! The registry only grows: there is no removal and no deduplication, so a
//! handler registered twice is invoked twice. Handlers registered under
//! [`EntryKind::Any`] are kept in a separate wildcard list that every entry
//! reaches after its kind-specific handlers.

use replay_events_core::{EntryKind, Handler, Message};
use std::collections::HashMap;

/// Ordered handler lists, one per kind plus the wildcard list.
pub struct Registry<E: Message> {
    by_kind: HashMap<EntryKind, Vec<Box<dyn Handler<E>>>>,
    wildcard: Vec<Box<dyn Handler<E>>>,
    len: usize,
}

impl<E: Message> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
            wildcard: Vec::new(),
            len: 0,
        }
    }

    /// Append a handler to the list for `kind`.
    pub fn insert(&mut self, kind: EntryKind, handler: Box<dyn Handler<E>>) {
        if kind.is_wildcard() {
            self.wildcard.push(handler);
        } else {
            self.by_kind.entry(kind).or_default().push(handler);
        }
        self.len += 1;
    }

    /// Handlers an entry tagged `tag` reaches, in invocation order.
    ///
    /// Kind-specific handlers come first, then the wildcard list. Tags outside
    /// the taxonomy only reach the wildcard list. The literal `"any"` tag
    /// resolves to the wildcard list as its kind list too, so it walks the
    /// wildcard handlers twice.
    pub fn resolve<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a dyn Handler<E>> + use<'a, E> {
        let specific = match EntryKind::from_wire(tag) {
            Some(kind) if kind.is_wildcard() => self.wildcard.as_slice(),
            Some(kind) => self.by_kind.get(&kind).map_or(&[][..], Vec::as_slice),
            None => &[],
        };

        specific
            .iter()
            .chain(self.wildcard.iter())
            .map(|handler| -> &'a dyn Handler<E> { &**handler })
    }

    /// Number of registrations under `kind`.
    pub fn count(&self, kind: EntryKind) -> usize {
        if kind.is_wildcard() {
            self.wildcard.len()
        } else {
            self.by_kind.get(&kind).map_or(0, Vec::len)
        }
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<E: Message> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
