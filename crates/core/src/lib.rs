//! GoldBit Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the GoldBit trading
//! ledger. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod accounts;
pub mod assets;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ledger;

// Re-export common types from the ledger module
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
