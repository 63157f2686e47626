//! Type-safe wrappers around [`StateClient`](crate::framework::StateClient).

pub mod actor_client;
pub mod order_client;

pub use actor_client::*;
pub use order_client::*;
