//! SQLite-backed holdings storage (read surface; mutation goes through the ledger).

mod model;
mod repository;

pub use model::HoldingDB;
pub use repository::HoldingsRepository;
