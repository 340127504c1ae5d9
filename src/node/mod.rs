//! Input-gated operations.
//!
//! Each submodule exposes one operation in the shape a host evaluation
//! cycle expects: required inputs arrive as `Option` values, an absent one
//! yields a typed [`NodeError::MissingInput`] instead of a silent no-op,
//! and the operation itself is a single synchronous call into the library.

use thiserror::Error;

pub mod conditioning;
pub mod folders;
pub mod people;
pub mod results;
pub mod search_sets;

/// Errors surfaced by the operation layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeError {
    /// A required input is not connected. Distinct from an empty input,
    /// which is legal.
    #[error("required input '{0}' is missing")]
    MissingInput(&'static str),
    /// An input is present but outside its legal domain.
    #[error("invalid input '{input}': {reason}")]
    InvalidInput {
        input: &'static str,
        reason: String,
    },
}

impl NodeError {
    pub(crate) fn invalid(input: &'static str, reason: impl ToString) -> Self {
        Self::InvalidInput {
            input,
            reason: reason.to_string(),
        }
    }
}
