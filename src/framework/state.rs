//! # ActorState Trait
//!
//! The `ActorState` trait is the contract a piece of in-memory state must satisfy to be owned
//! by a [`StateActor`](crate::framework::StateActor). The state receives typed actions one at a
//! time and answers each with a typed result or its own error type.
//!
//! # Architecture Note
//! The state itself stays a plain synchronous value: no locks, no channels, no `async`.
//! All of the message plumbing lives in the framework, so the same state can be driven
//! directly in unit tests and through an actor in production.

use crate::framework::FrameworkError;
use std::fmt::Debug;

/// State that can be owned and driven by a [`StateActor`](crate::framework::StateActor).
pub trait ActorState: Send + 'static {
    /// Enum of the operations the state understands.
    type Action: Send + Debug;

    /// The result returned by [`ActorState::handle_action`]. Variants usually
    /// match the action variants 1:1.
    type ActionResult: Send + Debug;

    /// Read-only projection returned for snapshot requests.
    type Snapshot: Send + Debug;

    /// The error type for this state.
    ///
    /// Must absorb [`FrameworkError`] so that clients can report transport
    /// failures and domain failures through a single type.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Apply one action. An `Err` must leave the state unchanged.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Produce the current snapshot.
    fn snapshot(&self) -> Self::Snapshot;

    /// Short label used in log lines.
    fn label() -> &'static str {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }
}
