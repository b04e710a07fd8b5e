//! SQLite-backed trade log and settlement.

mod model;
mod repository;

pub use model::TradeDB;
pub use repository::LedgerRepository;
