use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for state-specific clients to inherit the operations every actor supports.
///
/// Implementors only expose their inner [`StateClient`] and how transport errors
/// map into their own error type; `snapshot` comes for free.
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The state-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }

    /// Fetch a read-only projection of the whole state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
