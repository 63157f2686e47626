//! # Generic Messages
//!
//! Message types exchanged between a [`StateClient`](crate::framework::StateClient) and a
//! [`StateActor`](crate::framework::StateActor).

use crate::framework::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Internal message type sent to the actor.
///
/// - **Action**: state mutation or query, answered with the state's own result/error.
/// - **Snapshot**: read-only projection of the whole state.
pub enum StateRequest<S: ActorState> {
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult, S::Error>,
    },
    Snapshot {
        respond_to: oneshot::Sender<S::Snapshot>,
    },
}
