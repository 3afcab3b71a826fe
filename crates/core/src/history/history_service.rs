use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::history::{validate_period_key, PeriodBucketRule, ValuationRecord};
use crate::sleeves::Sleeve;
use crate::utils::Clock;

use super::history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};

pub struct HistoryService {
    repository: Arc<dyn HistoryRepositoryTrait>,
    clock: Arc<dyn Clock>,
    rule: PeriodBucketRule,
}

impl HistoryService {
    pub fn new(
        repository: Arc<dyn HistoryRepositoryTrait>,
        clock: Arc<dyn Clock>,
        rule: PeriodBucketRule,
    ) -> Self {
        Self {
            repository,
            clock,
            rule,
        }
    }
}

impl HistoryServiceTrait for HistoryService {
    fn record_valuation(
        &self,
        sleeve: Sleeve,
        period_key: &str,
        total_value: Decimal,
        deposit: Decimal,
    ) -> Result<ValuationRecord> {
        validate_period_key(period_key)?;
        if total_value < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Total value cannot be negative ({})",
                total_value
            ))
            .into());
        }
        if deposit < Decimal::ZERO {
            return Err(ValidationError::NegativeCash(deposit).into());
        }

        let record = ValuationRecord {
            sleeve,
            period_key: period_key.to_string(),
            total_value,
            deposit,
            recorded_at: self.clock.now(),
        };
        let saved = self.repository.upsert_valuation(&record)?;
        info!(
            "Recorded {} valuation {} for period {}",
            sleeve, saved.total_value, saved.period_key
        );
        Ok(saved)
    }

    fn record_current_valuation(
        &self,
        sleeve: Sleeve,
        total_value: Decimal,
        deposit: Decimal,
    ) -> Result<ValuationRecord> {
        let period_key = self.current_period_key();
        self.record_valuation(sleeve, &period_key, total_value, deposit)
    }

    fn read_history(&self, sleeve: Sleeve) -> Result<Vec<ValuationRecord>> {
        self.repository.get_history(sleeve)
    }

    fn latest_valuation(&self, sleeve: Sleeve) -> Result<Option<ValuationRecord>> {
        self.repository.get_latest(sleeve)
    }

    fn current_period_key(&self) -> String {
        self.rule.period_key(self.clock.today())
    }
}
