//! The order manager: the synchronous store of orders and its actor binding.

pub mod actions;
pub mod entity;
pub mod error;
pub mod manager;

pub use actions::*;
pub use error::*;
pub use manager::*;

use crate::clients::OrderClient;
use crate::framework::StateActor;

/// Creates a new order manager actor and its client.
pub fn new(buffer_size: usize) -> (StateActor<OrderManager>, OrderClient) {
    let (actor, generic_client) = StateActor::new(buffer_size, OrderManager::new());
    let client = OrderClient::new(generic_client);

    (actor, client)
}
