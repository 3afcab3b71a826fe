//! Rebalancing module - the cash-constrained allocation engine and the
//! service that persists its results.

pub mod rebalancing_calculator;
mod rebalancing_model;
mod rebalancing_service;
mod rebalancing_traits;


pub use rebalancing_calculator::rebalance;
pub use rebalancing_model::{PlanEntry, RebalanceOutcome, RebalancePlan, TradeDirection};
pub use rebalancing_service::RebalancingService;
pub use rebalancing_traits::RebalancingServiceTrait;
