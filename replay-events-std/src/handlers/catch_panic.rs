//! Panic isolation for handlers.

use replay_events_core::{BoxError, Handler, Message};
use std::panic::{AssertUnwindSafe, catch_unwind};
use thiserror::Error;

/// Error returned when a wrapped handler panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("handler panicked: {0}")]
pub struct PanicError(pub String);

/// A handler wrapper that turns a panic in the inner handler into an error.
///
/// The resulting error is handled by the dispatcher's failure policy like any
/// other handler failure.
#[derive(Debug, Clone, Copy)]
pub struct CatchPanic<H> {
    inner: H,
}

impl<H> CatchPanic<H> {
    /// Wrap a handler.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<E, H> Handler<E> for CatchPanic<H>
where
    E: Message,
    H: Handler<E>,
{
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        match catch_unwind(AssertUnwindSafe(|| self.inner.handle(entry))) {
            Ok(result) => result,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_owned())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_owned());
                Err(Box::new(PanicError(message)))
            }
        }
    }
}
