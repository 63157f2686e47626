//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the single writer that owns an [`ActorState`] and
//! processes requests sequentially.

use crate::framework::{ActorState, StateClient, StateRequest};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns one piece of state.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver end
/// of the channel. Requests are processed one at a time in [`StateActor::run`], so the
/// state never needs a `Mutex` or `RwLock`: exclusive ownership inside the task is the
/// synchronization.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the loop ends once the channel is closed.
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize, state: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, StateClient::new(sender))
    }

    /// Runs the event loop until the channel closes, then hands back the final state.
    pub async fn run(mut self) -> S {
        let state_type = S::label();
        info!(state_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self.state.handle_action(action);
                    match &result {
                        Ok(_) => info!(state_type, "Action ok"),
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(self.state.snapshot());
                }
            }
        }

        info!(state_type, "Shutdown");
        self.state
    }
}
