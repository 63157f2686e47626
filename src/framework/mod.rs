//! Generic actor framework for single-writer state.
//!
//! This module provides the building blocks for moving a synchronous piece of state behind
//! an async, channel-based interface so that many tasks can use it concurrently while
//! every mutation is applied one at a time.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that state types implement to be owned by an actor
//! - [`StateActor`] - Generic actor that owns the state and processes requests in order
//! - [`StateClient`] - Type-safe, cloneable client for talking to the actor
//! - [`FrameworkError`] - Transport errors (actor closed, reply dropped)
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;

pub use actor::StateActor;
pub use client::StateClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
