//! Decoders for already-serialized entry streams.

pub mod json;

pub use json::JsonLinesDecoder;
