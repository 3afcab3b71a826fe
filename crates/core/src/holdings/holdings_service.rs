use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PortfolioConfig;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::{DatabaseError, Result};
use crate::holdings::{target_weight_sum, validate_holdings, Holding};
use crate::sleeves::Sleeve;

use super::holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};

/// Holdings store with configured seed data for sleeves that have never been written.
///
/// A sleeve emptied by the user stays empty; only a sleeve the store has never
/// seen is seeded.
pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
    seeds: HashMap<Sleeve, Vec<Holding>>,
}

impl HoldingsService {
    pub fn new(
        repository: Arc<dyn HoldingsRepositoryTrait>,
        seeds: HashMap<Sleeve, Vec<Holding>>,
    ) -> Self {
        Self { repository, seeds }
    }

    pub fn from_config(
        repository: Arc<dyn HoldingsRepositoryTrait>,
        config: &PortfolioConfig,
    ) -> Self {
        Self::new(repository, config.seed_map())
    }

    fn seed(&self, sleeve: Sleeve) -> Result<Vec<Holding>> {
        let Some(seed) = self.seeds.get(&sleeve).filter(|s| !s.is_empty()) else {
            return Ok(Vec::new());
        };
        info!("Seeding {} with {} configured holdings", sleeve, seed.len());
        self.repository.upsert_holdings(sleeve, seed)?;
        self.repository.get_holdings(sleeve)
    }
}

pub(crate) fn warn_on_weight_drift(sleeve: Sleeve, holdings: &[Holding]) {
    if holdings.is_empty() {
        return;
    }
    let sum = target_weight_sum(holdings);
    if (sum - Decimal::ONE).abs() > WEIGHT_SUM_TOLERANCE {
        warn!(
            "Target weights for {} sum to {} instead of 1; rebalancing results will not conserve value",
            sleeve, sum
        );
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self, sleeve: Sleeve) -> Result<Vec<Holding>> {
        let stored = self.repository.get_holdings(sleeve)?;
        if stored.is_empty() && !self.repository.is_initialized(sleeve)? {
            return self.seed(sleeve);
        }
        Ok(stored)
    }

    fn replace_holdings(&self, sleeve: Sleeve, holdings: &[Holding]) -> Result<Vec<Holding>> {
        validate_holdings(holdings)?;
        warn_on_weight_drift(sleeve, holdings);
        let written = self.repository.upsert_holdings(sleeve, holdings)?;
        debug!("Upserted {} holdings for {}", written, sleeve);
        self.repository.get_holdings(sleeve)
    }

    fn delete_holding(&self, sleeve: Sleeve, code: &str) -> Result<()> {
        let deleted = self.repository.delete_holding(sleeve, code)?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound(format!(
                "Holding '{}' in sleeve {}",
                code, sleeve
            ))
            .into());
        }
        Ok(())
    }
}
