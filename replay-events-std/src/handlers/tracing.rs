//! Tracing Handler - Span instrumentation around an inner handler.

use replay_events_core::{BoxError, Handler, Tagged};

/// A handler wrapper that runs the inner handler inside a `tracing` span.
///
/// The span is named `handle_entry` and carries the wrapper's name and the
/// entry tag, so anything the inner handler logs is attributed to the entry
/// being processed. Without the `tracing` feature the wrapper is transparent.
#[derive(Debug, Clone, Copy)]
pub struct TracingHandler<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHandler<H> {
    /// Wrap `inner` in a span named after `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The span name this wrapper records under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwrap the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<E, H> Handler<E> for TracingHandler<H>
where
    E: Tagged,
    H: Handler<E>,
{
    #[cfg(feature = "tracing")]
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        let span = tracing::debug_span!("handle_entry", handler = %self.name, tag = %entry.tag());
        let _enter = span.enter();

        let result = self.inner.handle(entry);
        if let Err(error) = &result {
            tracing::debug!(%error, "handler returned an error");
        }
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        self.inner.handle(entry)
    }
}
