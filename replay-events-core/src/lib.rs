//! # replay-events-core
//!
//! Entry taxonomy and core traits for the replay-events dispatch framework.
//!
//! This crate has minimal dependencies and is meant to be shared by decoders
//! that produce entries and by hosts that only need the vocabulary, without
//! pulling in the dispatcher from `replay-events-std`.
//!
//! # Pieces
//!
//! - [`EntryKind`] - The closed vocabulary of entry categories and their wire
//!   strings, including the [`EntryKind::Any`] wildcard selector
//! - [`Entry`] - The decoded record, stamped with a wire tag
//! - [`Handler`] - The callback subscribed to one kind or to all of them
//! - [`Decoder`] - The contract an external capture decoder satisfies
//!
//! # Error Types
//!
//! - [`DispatchError`] - A dispatch pass failed
//! - [`ParseError`] - Decoding or dispatching failed

#![deny(clippy::wildcard_imports)]

mod decoder;
mod entry;
mod error;
mod handler;
mod kind;
mod message;
mod response;
mod shared;

// Re-exports
pub use decoder::Decoder;
pub use entry::Entry;
pub use error::{BoxError, DispatchError, HandlerFailure, ParseError};
pub use handler::Handler;
pub use kind::{EntryKind, Family, UnknownKind};
pub use message::{Message, Tagged};
pub use response::IntoOutcome;
pub use shared::SharedHandler;
