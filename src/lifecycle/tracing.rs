//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; the actor loop tags every event with an
//! `entity_type` field (`Product`, `Order`) instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and mutations
//! RUST_LOG=debug cargo run    # plus payloads and stock checks
//! ```
//!
//! A status change with `RUST_LOG=info` reads:
//!
//! ```text
//! INFO apply_transition{role=admin id=OrderId("order-1") requested=Processing}: Action ok entity_type="Order" id=order-1
//! INFO apply_transition{role=admin id=OrderId("order-1") requested=Processing}: Order status changed status=processing
//! ```
//!
//! A rejected one logs `Action failed` with the error and leaves the order as it was.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
