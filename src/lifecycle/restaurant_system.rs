use crate::clients::OrderClient;
use crate::lifecycle::SystemConfig;
use crate::order_manager::OrderManager;
use tracing::{error, info};

/// The runtime orchestrator for the order manager.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the order manager actor
/// - **Wiring**: Handing out the [`OrderClient`] every caller shares
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
///
/// let id = system.order_client.add_order(params).await?;
/// let bill = system.order_client.close_order(table).await?;
///
/// // Gracefully shut down when done
/// let manager = system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the order manager actor
    pub order_client: OrderClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<OrderManager>,
}

impl RestaurantSystem {
    /// Spawns the order manager with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let (actor, order_client) = crate::order_manager::new(config.channel_capacity);
        let handle = tokio::spawn(actor.run());
        info!(channel_capacity = config.channel_capacity, "System started");

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the system and returns the final manager state.
    ///
    /// Dropping the system's client closes the channel once every clone handed
    /// out to callers has been dropped as well. The actor then drains what is
    /// queued and exits its loop.
    ///
    /// # Returns
    ///
    /// - `Ok(OrderManager)` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<OrderManager, String> {
        info!("Shutting down system...");

        drop(self.order_client);

        match self.handle.await {
            Ok(manager) => {
                info!(
                    created = manager.created_orders_num(),
                    stored = manager.stored_orders_num(),
                    active = manager.active_orders_num(),
                    "System shutdown complete."
                );
                Ok(manager)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
