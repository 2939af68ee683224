//! # replay-events-std
//!
//! Standard implementations for the replay-events dispatch framework.
//!
//! This crate provides:
//! - **Dispatch**: [`Dispatcher`], its owned [`Registry`], and [`FailurePolicy`]
//! - **Standard handlers**: Logging, Tracing, Filter, CatchPanic
//! - **Decoders**: [`JsonLinesDecoder`] for serialized entry streams
//! - **Testing**: recording/counting/failing handlers and a static decoder
//!
//! # Features
//!
//! - `tracing` (default): structured logging of subscriptions, dispatch passes
//!   and handler failures through the `tracing` crate

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use replay_events_core;

// Modules
pub mod config;
pub mod decoders;
pub mod dispatcher;
pub mod handlers;
pub mod registry;
pub mod testing;

pub use config::FailurePolicy;
pub use decoders::JsonLinesDecoder;
pub use dispatcher::{Delivered, Dispatcher};
pub use registry::Registry;
