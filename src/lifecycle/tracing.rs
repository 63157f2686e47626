//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`. The crate/module prefix is hidden (`with_target(false)`); log lines
//! carry a `state_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, and final counters
//! - **Actions**: one `info` line per applied action, `warn` with the message on failure
//! - **Client calls**: a span per `OrderClient` method with its arguments
//! - **Manager bookkeeping**: `debug` lines on order creation, removal and close
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Show action payloads and counter changes
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a dish being added looks like:
//!
//! ```text
//! DEBUG table_service:add_dish_to_order{table=TableNumber(3) dish=Soup}: Sending request dish=Dish { .. }
//! DEBUG Action state_type="OrderManager" action=AddDish { .. }
//!  INFO Action ok state_type="OrderManager"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
