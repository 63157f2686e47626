//! # Framework Errors
//!
//! Transport failures between a [`StateClient`](crate::framework::StateClient) and its actor.
//! Domain failures travel in the state's own error type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
