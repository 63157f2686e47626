//! # Table Orders
//!
//! In-memory order management for a restaurant: orders keyed by table, the dishes
//! on each order, their kitchen status, and the bill.
//!
//! ## Module Tour
//!
//! ### 1. The Domain ([`model`], [`order_manager`])
//! Validated field types, [`Dish`](model::Dish) and [`Order`](model::Order), and the
//! synchronous [`OrderManager`](order_manager::OrderManager) that owns every order
//! and keeps the counters.
//! - **Role**: All business rules. Plain values, no locks, no `async`.
//!
//! ### 2. The Engine ([`framework`])
//! A generic single-writer actor, [`StateActor<S>`](framework::StateActor), that owns
//! any [`ActorState`](framework::ActorState) and applies requests one at a time.
//! - **Role**: Separates the *business logic* from the *plumbing* (channels, message loop, transport errors).
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) wraps the generic client and exposes one
//! async method per manager operation.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) spawns the actor and shuts it
//! down; [`setup_tracing`](lifecycle::setup_tracing) configures logging.
//!
//! ## Error Handling
//! Every fallible operation returns [`OrderError`](order_manager::OrderError). Its
//! [`kind`](order_manager::OrderError::kind) tells an outer interface whether the
//! caller sent bad input, asked for something missing, hit a duplicate, or lost the actor.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_manager;
