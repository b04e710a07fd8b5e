//! SQLite-backed account storage.

mod model;
mod repository;

pub use model::AccountDB;
pub use repository::AccountRepository;
