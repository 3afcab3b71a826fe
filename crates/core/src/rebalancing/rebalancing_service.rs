use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::Result;
use crate::history::HistoryServiceTrait;
use crate::holdings::{validate_holdings, warn_on_weight_drift, Holding, HoldingsServiceTrait};
use crate::sleeves::Sleeve;

use super::rebalancing_calculator;
use super::rebalancing_model::{RebalanceOutcome, RebalancePlan};
use super::rebalancing_traits::RebalancingServiceTrait;

/// One-shot rebalancing runs over the holdings store and the history ledger.
///
/// The two writes of a run are not covered by a shared transaction, and two
/// sessions running against the same sleeve at once are not supported.
pub struct RebalancingService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    history_service: Arc<dyn HistoryServiceTrait>,
}

impl RebalancingService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        history_service: Arc<dyn HistoryServiceTrait>,
    ) -> Self {
        Self {
            holdings_service,
            history_service,
        }
    }
}

impl RebalancingServiceTrait for RebalancingService {
    fn preview(
        &self,
        sleeve: Sleeve,
        holdings: &[Holding],
        new_cash: Decimal,
    ) -> Result<RebalancePlan> {
        validate_holdings(holdings)?;
        warn_on_weight_drift(sleeve, holdings);
        rebalancing_calculator::rebalance(holdings, new_cash)
    }

    fn rebalance(
        &self,
        sleeve: Sleeve,
        holdings: &[Holding],
        new_cash: Decimal,
    ) -> Result<RebalanceOutcome> {
        let plan = self.preview(sleeve, holdings, new_cash)?;
        info!(
            "Rebalancing {}: {} holdings, value {} + cash {}, {} trades, {} cash left",
            sleeve,
            plan.entries.len(),
            plan.pre_trade_value,
            plan.new_cash,
            plan.trades().count(),
            plan.remaining_cash
        );

        let updated_holdings = self
            .holdings_service
            .replace_holdings(sleeve, &plan.updated_holdings())?;
        let valuation = self.history_service.record_current_valuation(
            sleeve,
            plan.post_trade_total(),
            new_cash,
        )?;

        Ok(RebalanceOutcome {
            sleeve,
            plan,
            updated_holdings,
            valuation,
        })
    }

    fn rebalance_stored(&self, sleeve: Sleeve, new_cash: Decimal) -> Result<RebalanceOutcome> {
        let holdings = self.holdings_service.get_holdings(sleeve)?;
        self.rebalance(sleeve, &holdings, new_cash)
    }
}
