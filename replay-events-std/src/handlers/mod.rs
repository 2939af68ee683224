//! Standard handler implementations and wrappers.

pub mod catch_panic;
pub mod filter;
pub mod logging;
pub mod tracing;

pub use catch_panic::{CatchPanic, PanicError};
pub use filter::FilterHandler;
pub use logging::LoggingHandler;
pub use self::tracing::TracingHandler;
