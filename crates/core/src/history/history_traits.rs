use rust_decimal::Decimal;

use crate::errors::Result;
use crate::history::ValuationRecord;
use crate::sleeves::Sleeve;

/// Persistence contract for the valuation ledger.
pub trait HistoryRepositoryTrait: Send + Sync {
    /// Inserts the record, replacing any record with the same sleeve and period key.
    fn upsert_valuation(&self, record: &ValuationRecord) -> Result<ValuationRecord>;

    /// All records of a sleeve ordered by period key ascending.
    fn get_history(&self, sleeve: Sleeve) -> Result<Vec<ValuationRecord>>;

    /// Record with the greatest period key, if any.
    fn get_latest(&self, sleeve: Sleeve) -> Result<Option<ValuationRecord>>;
}

pub trait HistoryServiceTrait: Send + Sync {
    fn record_valuation(
        &self,
        sleeve: Sleeve,
        period_key: &str,
        total_value: Decimal,
        deposit: Decimal,
    ) -> Result<ValuationRecord>;

    /// Files the valuation under the bucket the clock currently falls in.
    fn record_current_valuation(
        &self,
        sleeve: Sleeve,
        total_value: Decimal,
        deposit: Decimal,
    ) -> Result<ValuationRecord>;

    fn read_history(&self, sleeve: Sleeve) -> Result<Vec<ValuationRecord>>;

    fn latest_valuation(&self, sleeve: Sleeve) -> Result<Option<ValuationRecord>>;

    fn current_period_key(&self) -> String;
}
