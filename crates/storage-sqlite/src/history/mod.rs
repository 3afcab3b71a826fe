//! SQLite storage implementation for the valuation history ledger.

mod model;
mod repository;

pub use model::ValuationRecordDB;
pub use repository::HistoryRepository;

// Re-export trait from core for convenience
pub use sleevefolio_core::history::HistoryRepositoryTrait;
