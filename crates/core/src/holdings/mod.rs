//! Holdings module - per-sleeve holdings, their store contract and service.

mod holdings_model;
mod holdings_service;
mod holdings_traits;

#[cfg(test)]
mod holdings_service_tests;

pub use holdings_model::{target_weight_sum, validate_holdings, Holding};
pub use holdings_service::HoldingsService;
pub(crate) use holdings_service::warn_on_weight_drift;
pub use holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
