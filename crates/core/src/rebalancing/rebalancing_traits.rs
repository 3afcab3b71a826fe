use rust_decimal::Decimal;

use crate::errors::Result;
use crate::holdings::Holding;
use crate::sleeves::Sleeve;

use super::rebalancing_model::{RebalanceOutcome, RebalancePlan};

pub trait RebalancingServiceTrait: Send + Sync {
    /// Runs the engine without persisting anything.
    fn preview(&self, sleeve: Sleeve, holdings: &[Holding], new_cash: Decimal)
        -> Result<RebalancePlan>;

    /// Runs the engine on caller-supplied holdings (e.g. after user edits),
    /// persists the resulting quantities and records the sleeve's new total.
    fn rebalance(
        &self,
        sleeve: Sleeve,
        holdings: &[Holding],
        new_cash: Decimal,
    ) -> Result<RebalanceOutcome>;

    /// Same as [`RebalancingServiceTrait::rebalance`], starting from the stored holdings.
    fn rebalance_stored(&self, sleeve: Sleeve, new_cash: Decimal) -> Result<RebalanceOutcome>;
}
