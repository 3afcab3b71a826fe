use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::history::ValuationRecord;
use crate::holdings::Holding;
use crate::sleeves::Sleeve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Buy,
    Sell,
    Hold,
}

impl TradeDirection {
    pub fn from_quantity(quantity: Decimal) -> Self {
        if quantity > Decimal::ZERO {
            TradeDirection::Buy
        } else if quantity < Decimal::ZERO {
            TradeDirection::Sell
        } else {
            TradeDirection::Hold
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "BUY"),
            TradeDirection::Sell => write!(f, "SELL"),
            TradeDirection::Hold => write!(f, "HOLD"),
        }
    }
}

/// One row of a rebalancing plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Index of the holding in the engine's input.
    pub position: usize,
    /// Holding as it was before the trade.
    pub holding: Holding,
    pub current_value: Decimal,
    /// Share of the post-cash basis, not of the pre-trade value.
    pub current_ratio: Decimal,
    pub target_ratio: Decimal,
    pub target_value: Decimal,
    /// `target_value - current_value`; positive means underweight.
    pub deficit: Decimal,
    /// Whole units, signed.
    pub trade_quantity: Decimal,
    pub trade_direction: TradeDirection,
    /// `trade_quantity * price`.
    pub trade_value: Decimal,
}

impl PlanEntry {
    pub fn post_trade_quantity(&self) -> Decimal {
        self.holding.quantity + self.trade_quantity
    }
}

/// Result of one engine run. Entries are in processing order, largest
/// absolute deficit first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancePlan {
    pub entries: Vec<PlanEntry>,
    /// Market value of the holdings before new cash is added.
    pub pre_trade_value: Decimal,
    pub new_cash: Decimal,
    /// `pre_trade_value + new_cash`, the basis target weights apply to.
    pub total_investable: Decimal,
    /// Cash budget left after the walk.
    pub remaining_cash: Decimal,
}

impl RebalancePlan {
    /// Value persisted to the ledger for this run.
    pub fn post_trade_total(&self) -> Decimal {
        self.pre_trade_value + self.new_cash
    }

    pub fn cash_used(&self) -> Decimal {
        self.new_cash - self.remaining_cash
    }

    pub fn trades(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries
            .iter()
            .filter(|e| e.trade_direction != TradeDirection::Hold)
    }

    /// Holdings with trade quantities applied, in the engine's input order.
    pub fn updated_holdings(&self) -> Vec<Holding> {
        let mut ordered: Vec<&PlanEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.position);
        ordered
            .into_iter()
            .map(|e| Holding {
                quantity: e.post_trade_quantity(),
                ..e.holding.clone()
            })
            .collect()
    }
}

/// Everything the presentation layer needs after a persisted run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceOutcome {
    pub sleeve: Sleeve,
    pub plan: RebalancePlan,
    pub updated_holdings: Vec<Holding>,
    pub valuation: ValuationRecord,
}
