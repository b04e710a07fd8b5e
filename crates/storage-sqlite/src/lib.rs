//! SQLite storage implementation for the GoldBit ledger.
//!
//! This crate provides all database-related functionality using Diesel ORM with
//! SQLite. It implements the repository traits defined in `goldbit-core` and
//! contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for accounts, assets, holdings, and the trade log
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `goldbit-core` is database-agnostic and works with traits.
//!
//! All mutations funnel through a single-writer actor that owns one dedicated
//! connection and wraps each job in an immediate transaction. That gives trade
//! settlement the ordering guarantee it needs: concurrent orders against the
//! same (account, asset) pair serialize their read-modify-write, so two sells
//! can never both observe the same stale holding quantity.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod accounts;
pub mod assets;
pub mod holdings;
pub mod ledger;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from goldbit-core for convenience
pub use goldbit_core::errors::{DatabaseError, Error, Result};
