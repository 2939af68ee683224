//! # replay-events - Typed Dispatch for Decoded Replay Entries
//!
//! `replay-events` names every kind of entry a replay decoder can emit and
//! routes those entries, in order, to the handlers subscribed to them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use replay_events::prelude::*;
//!
//! let mut dispatcher: Dispatcher = Dispatcher::new();
//!
//! // Only chat entries.
//! dispatcher.subscribe(EntryKind::Chat, |entry: &Entry| {
//!     println!("[{}] slot {:?}: {:?}", entry.time, entry.slot, entry.key);
//! });
//!
//! // Every entry, after the kind-specific handlers.
//! let seen = dispatcher.subscribe(EntryKind::Any, CountingHandler::new());
//!
//! dispatcher.parse(&JsonLinesDecoder::new(), &capture)?;
//! println!("{} entries", seen.count());
//! ```
//!
//! ## Failure Handling
//!
//! A handler error aborts the pass by default. Build the dispatcher with
//! [`FailurePolicy::Isolate`] to run every handler and collect the failures
//! instead; wrap a handler in [`handlers::CatchPanic`] to treat its panics
//! the same way.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use replay_events_core::{
    // Decoding
    Decoder,
    // Entries
    Entry,
    EntryKind,
    Family,
    Message,
    Tagged,
    UnknownKind,
    // Handlers
    Handler,
    IntoOutcome,
    SharedHandler,
    // Errors
    BoxError,
    DispatchError,
    HandlerFailure,
    ParseError,
};

pub use replay_events_std::{Delivered, Dispatcher, FailurePolicy, Registry};

/// Standard handler wrappers.
pub mod handlers {
    #![allow(clippy::wildcard_imports)]
    pub use replay_events_std::handlers::*;
}

/// Bundled decoders.
pub mod decoders {
    pub use replay_events_std::decoders::json::JsonLinesDecoder;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use replay_events_std::testing::*;
}

/// Prelude module - common imports for replay-events.
///
/// # Usage
///
/// ```rust,ignore
/// use replay_events::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        DispatchError,
        ParseError,
        // Core types
        Decoder,
        Delivered,
        Dispatcher,
        Entry,
        EntryKind,
        FailurePolicy,
        Handler,
        Tagged,
        // Bundled pieces
        decoders::JsonLinesDecoder,
        testing::CountingHandler,
    };
}
