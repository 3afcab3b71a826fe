//! Greedy, cash-constrained allocation engine.
//!
//! Holdings are served in order of their absolute deficit against the target
//! weights (stable for ties). Every trade, buy or sell, draws on the same cash
//! budget, so with no new cash nothing is traded. Quantities are whole units
//! truncated toward zero, fractional assets included.

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::holdings::{validate_holdings, Holding};

use super::rebalancing_model::{PlanEntry, RebalancePlan, TradeDirection};

struct Candidate<'a> {
    position: usize,
    holding: &'a Holding,
    current_value: Decimal,
    target_value: Decimal,
    deficit: Decimal,
}

/// Computes the trade list that moves `holdings` toward their target weights
/// using `new_cash`.
pub fn rebalance(holdings: &[Holding], new_cash: Decimal) -> Result<RebalancePlan> {
    if new_cash < Decimal::ZERO {
        return Err(ValidationError::NegativeCash(new_cash).into());
    }
    for holding in holdings {
        if holding.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice {
                code: holding.code.clone(),
                price: holding.price,
            }
            .into());
        }
    }
    validate_holdings(holdings)?;

    let pre_trade_value = portfolio_value(holdings)?;
    let total_investable = pre_trade_value
        .checked_add(new_cash)
        .ok_or_else(|| Error::invalid_input("Investable total overflows"))?;
    if total_investable.is_zero() {
        return Err(ValidationError::ZeroInvestableBasis.into());
    }

    let mut candidates: Vec<Candidate> = holdings
        .iter()
        .enumerate()
        .map(|(position, holding)| {
            let current_value = holding.market_value();
            let target_value = total_investable * holding.target_weight;
            Candidate {
                position,
                holding,
                current_value,
                target_value,
                deficit: target_value - current_value,
            }
        })
        .collect();

    // Vec::sort_by is stable: equal imbalances keep their input order.
    candidates.sort_by(|a, b| b.deficit.abs().cmp(&a.deficit.abs()));

    let mut remaining_cash = new_cash;
    let mut entries = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let price = candidate.holding.price;
        let trade_value = if candidate.deficit.abs() <= remaining_cash {
            candidate.deficit
        } else if candidate.deficit > Decimal::ZERO {
            remaining_cash
        } else {
            -remaining_cash
        };

        let mut trade_quantity = trade_value
            .checked_div(price)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "Trade of {} in '{}' at price {} overflows",
                    trade_value, candidate.holding.code, price
                ))
            })?
            .trunc();
        // Division is rounded to 28 digits; never let that push a trade past the budget.
        if (trade_quantity * price).abs() > remaining_cash {
            if trade_quantity > Decimal::ZERO {
                trade_quantity -= Decimal::ONE;
            } else {
                trade_quantity += Decimal::ONE;
            }
        }
        if trade_quantity.is_zero() {
            trade_quantity = Decimal::ZERO;
        }

        let executed_value = trade_quantity * price;
        remaining_cash -= executed_value.abs();

        debug!(
            "{}: deficit {} -> trade {} units ({}), cash left {}",
            candidate.holding.code, candidate.deficit, trade_quantity, executed_value, remaining_cash
        );

        entries.push(PlanEntry {
            position: candidate.position,
            holding: candidate.holding.clone(),
            current_value: candidate.current_value,
            current_ratio: candidate.current_value / total_investable,
            target_ratio: candidate.holding.target_weight,
            target_value: candidate.target_value,
            deficit: candidate.deficit,
            trade_quantity,
            trade_direction: TradeDirection::from_quantity(trade_quantity),
            trade_value: executed_value,
        });
    }

    Ok(RebalancePlan {
        entries,
        pre_trade_value,
        new_cash,
        total_investable,
        remaining_cash,
    })
}

fn portfolio_value(holdings: &[Holding]) -> Result<Decimal> {
    holdings.iter().try_fold(Decimal::ZERO, |total, holding| {
        holding
            .price
            .checked_mul(holding.quantity)
            .and_then(|value| total.checked_add(value))
            .ok_or_else(|| {
                Error::invalid_input(format!("Value of holding '{}' overflows", holding.code))
            })
    })
}
