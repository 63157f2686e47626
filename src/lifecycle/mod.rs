//! Runtime orchestration and lifecycle management.
//!
//! - [`RestaurantSystem`] - Spawns the order manager actor and shuts it down
//! - [`SystemConfig`] - Channel sizing, optionally read from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod restaurant_system;
pub mod tracing;

pub use self::config::*;
pub use self::restaurant_system::*;
pub use self::tracing::*;
