//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{Result, ValidationError};
use crate::money::amount_format;

/// One position inside a sleeve. Holdings have no identity outside their sleeve;
/// `code` is unique within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub code: String,
    pub name: String,
    #[serde(with = "amount_format")]
    pub price: Decimal,
    #[serde(with = "amount_format")]
    pub quantity: Decimal,
    #[serde(with = "amount_format")]
    pub target_weight: Decimal,
}

impl Holding {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity: Decimal,
        target_weight: Decimal,
    ) -> Result<Self> {
        let holding = Self {
            code: code.into(),
            name: name.into(),
            price,
            quantity,
            target_weight,
        };
        holding.validate()?;
        Ok(holding)
    }

    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Holding code cannot be empty".to_string()).into(),
            );
        }
        if self.price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Holding '{}' has a negative price ({})",
                self.code, self.price
            ))
            .into());
        }
        if self.quantity < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Holding '{}' has a negative quantity ({})",
                self.code, self.quantity
            ))
            .into());
        }
        if self.target_weight < Decimal::ZERO || self.target_weight > Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "Holding '{}' target weight must be between 0 and 1, got {}",
                self.code, self.target_weight
            ))
            .into());
        }
        Ok(())
    }

    /// Market value at the current price.
    pub fn market_value(&self) -> Decimal {
        self.price * self.quantity
    }
}

/// Validates every holding and rejects duplicate codes.
pub fn validate_holdings(holdings: &[Holding]) -> Result<()> {
    let mut seen = HashSet::with_capacity(holdings.len());
    for holding in holdings {
        holding.validate()?;
        if !seen.insert(holding.code.as_str()) {
            return Err(ValidationError::DuplicateHoldingCode(holding.code.clone()).into());
        }
    }
    Ok(())
}

pub fn target_weight_sum(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(|h| h.target_weight).sum()
}
