//! # Handler
//!
//! The callback invoked for each matching entry.
//!
//! Handlers receive a borrowed entry and run to completion before the next
//! handler or entry is processed. They report failure through their return
//! value; the dispatcher decides what a failure does to the rest of the pass.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|entry: &Entry| { ... }` or one returning `Result<(), E>`
//! 2. **Struct implementation**: `impl Handler<Entry> for MyHandler`
//! 3. **Shared**: [`SharedHandler`] when the same instance must be observable
//!    across several registrations
//!
//! [`SharedHandler`]: crate::SharedHandler

use crate::{error::BoxError, message::Message, response::IntoOutcome};

/// A subscriber callback for records of type `E`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle records of type `{E}`",
    label = "missing `Handler<{E}>` implementation",
    note = "Handlers must implement `handle`, or be a closure `Fn(&{E})` returning `()` or `Result`."
)]
pub trait Handler<E: Message>: Send + Sync + 'static {
    /// Process one record.
    fn handle(&self, entry: &E) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<F, E, R> Handler<E> for F
where
    E: Message,
    F: Fn(&E) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn handle(&self, entry: &E) -> Result<(), BoxError> {
        (self)(entry).into_outcome()
    }
}
