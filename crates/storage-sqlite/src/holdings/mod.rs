//! SQLite storage implementation for sleeve holdings.

pub(crate) mod model;
mod repository;

pub use model::{HoldingDB, SleeveStateDB};
pub use repository::HoldingsRepository;

// Re-export trait from core for convenience
pub use sleevefolio_core::holdings::HoldingsRepositoryTrait;
