//! Valuation history domain model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sleeves::Sleeve;

/// Total value of a sleeve filed under a period bucket.
///
/// There is at most one record per `(sleeve, period_key)`; a later write in the
/// same period replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub sleeve: Sleeve,
    pub period_key: String,
    pub total_value: Decimal,
    /// New cash injected by the run that produced this record.
    pub deposit: Decimal,
    pub recorded_at: NaiveDateTime,
}
