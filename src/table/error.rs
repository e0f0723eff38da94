//! Build errors for rule tables.

use crate::table::hooks::Lifecycle;
use thiserror::Error;

/// Errors that can occur when assembling a transition table.
///
/// Each variant is the table-level analogue of an ambiguous overload: two
/// entries that would compete for the same dispatch key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Rule for {pattern} registered more than once")]
    DuplicateRule { pattern: String },

    #[error("{lifecycle} hook for {key} registered more than once")]
    DuplicateHook { lifecycle: Lifecycle, key: String },
}
