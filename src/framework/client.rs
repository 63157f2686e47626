//! # Generic Client
//!
//! This module defines the generic client for communicating with a state actor.

use crate::framework::{ActorState, FrameworkError, StateRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for sending requests to a [`StateActor`](crate::framework::StateActor).
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – replies arrive over a oneshot channel.
/// * **Single error type** – transport errors are folded into `S::Error`.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(sender: mpsc::Sender<StateRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn perform_action(&self, action: S::Action) -> Result<S::ActionResult, S::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}
