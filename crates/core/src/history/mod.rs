//! History ledger - one valuation per sleeve per period bucket.

mod history_model;
mod history_service;
mod history_traits;
mod period;


pub use history_model::ValuationRecord;
pub use history_service::HistoryService;
pub use history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
pub use period::{validate_period_key, PeriodBucketRule};
