//! Dispatcher configuration.

use serde::{Deserialize, Serialize};

/// What a failing handler does to the rest of a dispatch pass.
///
/// Deserializes from `"abort"` or `"isolate"` so hosts can carry it in their
/// own configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failure; later handlers and entries are skipped.
    #[default]
    Abort,
    /// Keep going; report every failure once the pass is complete.
    Isolate,
}
