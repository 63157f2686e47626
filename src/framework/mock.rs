//! # Mock Framework
//!
//! Utilities for testing client wrappers without spawning a real [`StateActor`](crate::framework::StateActor).
//!
//! | Feature | Mock helpers | Real Actor |
//! |---------|--------------|------------|
//! | **State** | None, replies are scripted | Real state transitions |
//! | **Use Case** | Logic *around* the client (request shape, reply mapping) | The state itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires building the failing state |
//!
//! Two styles are available:
//! - [`create_mock_client`] + [`expect_action`]: inspect each request by hand and answer it.
//! - [`MockClient`]: queue expected replies up front, then [`MockClient::verify`] at the end.

use crate::framework::{ActorState, StateClient, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests read from the receiver, assert on the request, and answer through the
/// responder, simulating success, failure, or a dropped actor deterministically.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<S::ActionResult, S::Error>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request.
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<S::Snapshot>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<S: ActorState> {
    Action(Result<S::ActionResult, S::Error>),
    Snapshot(S::Snapshot),
}

type Queue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock client that answers requests from a queue of scripted replies.
///
/// ```ignore
/// let mut mock = MockClient::<OrderManager>::new();
/// mock.expect_action().return_ok(ManagerActionResult::CloseOrder(12.0));
/// let client = OrderClient::new(mock.client());
/// // ... exercise the client ...
/// mock.verify();
/// ```
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Queue<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> MockClient<S> {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let expectations: Queue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().ok().and_then(|mut q| q.pop_front());
                match (request, next) {
                    (StateRequest::Action { respond_to, .. }, Some(Expectation::Action(reply))) => {
                        let _ = respond_to.send(reply);
                    }
                    (StateRequest::Snapshot { respond_to }, Some(Expectation::Snapshot(reply))) => {
                        let _ = respond_to.send(reply);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects an action request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<S> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a snapshot request and answers it with `snapshot`.
    pub fn expect_snapshot(&mut self, snapshot: S::Snapshot) {
        if let Ok(mut q) = self.expectations.lock() {
            q.push_back(Expectation::Snapshot(snapshot));
        }
    }

    /// Panics if any scripted reply was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().map(|q| q.len()).unwrap_or(0);
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<S: ActorState> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for action expectations.
pub struct ActionExpectationBuilder<S: ActorState> {
    expectations: Queue<S>,
}

impl<S: ActorState> ActionExpectationBuilder<S> {
    pub fn return_ok(self, result: S::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: S::Error) {
        self.push(Err(error));
    }

    fn push(self, reply: Result<S::ActionResult, S::Error>) {
        if let Ok(mut q) = self.expectations.lock() {
            q.push_back(Expectation::Action(reply));
        }
    }
}
