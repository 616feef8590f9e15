//! dentara-audit
//!
//! Structured audit events for charted calculations. The calculators
//! themselves never log; the charting layer emits one event per
//! calculation it records, and the embedding application routes them
//! through its `tracing` subscriber.

pub mod error;
pub mod events;
