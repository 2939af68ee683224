//! Error types for replay-events.
//!
//! - [`DispatchError`] - A dispatch pass stopped or finished with handler failures
//! - [`HandlerFailure`] - One failed handler invocation
//! - [`ParseError`] - Decode-then-dispatch failed in either stage

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One failed handler invocation.
#[derive(Error, Debug)]
#[error("handler failed on entry #{index} (`{tag}`): {error}")]
pub struct HandlerFailure {
    /// Position of the entry in the dispatched sequence.
    pub index: usize,
    /// Wire tag of the entry.
    pub tag: String,
    /// The handler's own error.
    #[source]
    pub error: BoxError,
}

/// Errors that can occur during a dispatch pass.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A handler failed and the rest of the pass was abandoned.
    #[error("handler failed on entry #{index} (`{tag}`)")]
    Handler {
        /// Position of the entry in the dispatched sequence.
        index: usize,
        /// Wire tag of the entry.
        tag: String,
        /// The handler's own error.
        #[source]
        source: BoxError,
    },

    /// The pass ran to completion but some handlers failed.
    #[error("{} handler invocation(s) failed", .0.len())]
    Isolated(Vec<HandlerFailure>),
}

impl DispatchError {
    /// Every failure carried by this error, in occurrence order.
    pub fn into_failures(self) -> Vec<HandlerFailure> {
        match self {
            DispatchError::Handler { index, tag, source } => vec![HandlerFailure {
                index,
                tag,
                error: source,
            }],
            DispatchError::Isolated(failures) => failures,
        }
    }
}

impl From<HandlerFailure> for DispatchError {
    fn from(failure: HandlerFailure) -> Self {
        DispatchError::Handler {
            index: failure.index,
            tag: failure.tag,
            source: failure.error,
        }
    }
}

/// Errors from decoding a capture and dispatching its entries.
///
/// The decode variant holds the decoder's error value untouched.
#[derive(Error, Debug)]
pub enum ParseError<D>
where
    D: std::error::Error + 'static,
{
    /// The decoder rejected the capture.
    #[error(transparent)]
    Decode(D),

    /// A handler failed while the decoded entries were dispatched.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl<D> ParseError<D>
where
    D: std::error::Error + 'static,
{
    /// The decoder error, if decoding is what failed.
    pub fn into_decode(self) -> Option<D> {
        match self {
            ParseError::Decode(err) => Some(err),
            ParseError::Dispatch(_) => None,
        }
    }
}
