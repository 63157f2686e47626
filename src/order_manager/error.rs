//! Error types for the order manager.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Every variant carries a single human-readable message describing the
/// violated precondition. Validation always runs before any mutation, so an
/// `Err` means the manager state is unchanged.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A value was missing, non-positive, blank, or outside its enum.
    #[error("{0}")]
    InvalidArgument(String),

    /// No order or dish matched the given identifier.
    #[error("{0}")]
    NotFound(String),

    /// The dish name is already present in the order.
    #[error("{0}")]
    Conflict(String),

    /// The manager actor could not be reached.
    #[error("Actor communication error: {0}")]
    Actor(#[from] FrameworkError),
}

/// Coarse classification used by an outer interface to pick a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Conflict,
    Unavailable,
}

impl OrderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        OrderError::InvalidArgument(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        OrderError::NotFound(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::Conflict(_) => ErrorKind::Conflict,
            OrderError::Actor(_) => ErrorKind::Unavailable,
        }
    }
}
