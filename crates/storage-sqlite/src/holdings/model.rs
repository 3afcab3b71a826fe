//! Database models for holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use sleevefolio_core::holdings::Holding;
use sleevefolio_core::Sleeve;

/// Database model for holdings. Decimals are kept as their exact text form.
#[derive(Queryable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub sleeve: String,
    pub code: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub target_weight: String,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl HoldingDB {
    pub fn from_domain(
        sleeve: Sleeve,
        holding: &Holding,
        position: i32,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            sleeve: sleeve.as_str().to_string(),
            code: holding.code.clone(),
            name: holding.name.clone(),
            price: holding.price.to_string(),
            quantity: holding.quantity.to_string(),
            target_weight: holding.target_weight.to_string(),
            position,
            updated_at,
        }
    }
}

/// Marks a sleeve as written by the holdings store.
#[derive(Queryable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::sleeve_state)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SleeveStateDB {
    pub sleeve: String,
    pub initialized_at: NaiveDateTime,
}

pub(crate) fn parse_stored_decimal(
    value: &str,
    column: &str,
    owner: &str,
) -> Result<Decimal, StorageError> {
    Decimal::from_str(value).map_err(|e| {
        StorageError::CorruptedValue(format!("{} of {} is '{}': {}", column, owner, value, e))
    })
}

// Conversion to domain model
impl TryFrom<HoldingDB> for Holding {
    type Error = StorageError;

    fn try_from(db: HoldingDB) -> Result<Self, Self::Error> {
        let owner = format!("holding '{}' in {}", db.code, db.sleeve);
        Ok(Self {
            price: parse_stored_decimal(&db.price, "price", &owner)?,
            quantity: parse_stored_decimal(&db.quantity, "quantity", &owner)?,
            target_weight: parse_stored_decimal(&db.target_weight, "target_weight", &owner)?,
            code: db.code,
            name: db.name,
        })
    }
}
