//! # Decoder Contract
//!
//! The decoder turns raw capture bytes into an ordered sequence of tagged
//! records. Binary replay decoding lives outside this framework; this trait is
//! the seam a host plugs its decoder into.
//!
//! # Contract
//!
//! - The returned order is authoritative and is preserved verbatim by dispatch.
//! - Every record should carry one of the [`EntryKind`] wire strings; records
//!   with other tags are tolerated downstream.
//! - Malformed input fails with the decoder's own error type, which reaches the
//!   caller untouched.
//!
//! [`EntryKind`]: crate::EntryKind

use crate::message::Tagged;

/// Turns raw capture bytes into ordered records.
pub trait Decoder {
    /// The record type produced.
    type Entry: Tagged;

    /// The decoder-specific failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decode a complete capture.
    fn decode(&self, raw: &[u8]) -> Result<Vec<Self::Entry>, Self::Error>;
}

// Blanket impl for decoder functions
impl<F, T, Err> Decoder for F
where
    F: Fn(&[u8]) -> Result<Vec<T>, Err>,
    T: Tagged,
    Err: std::error::Error + Send + Sync + 'static,
{
    type Entry = T;
    type Error = Err;

    fn decode(&self, raw: &[u8]) -> Result<Vec<T>, Err> {
        (self)(raw)
    }
}
