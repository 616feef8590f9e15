//! dentara-core
//!
//! Pure domain types: landmarks, FDI tooth numbering, and the charted
//! calculation record. No calculator logic, no I/O — this is the shared
//! vocabulary of the Dentara system.

pub mod error;
pub mod models;
