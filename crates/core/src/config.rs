//! Host-supplied portfolio configuration: period bucketing, the preset cash
//! amount and the holdings each sleeve starts with.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_NEW_CASH;
use crate::errors::{Error, Result};
use crate::history::PeriodBucketRule;
use crate::holdings::{validate_holdings, Holding};
use crate::money::amount_format;
use crate::sleeves::Sleeve;

/// Initial holdings of one sleeve, written to the store the first time the
/// sleeve is read while empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleeveSeed {
    pub sleeve: Sleeve,
    pub holdings: Vec<Holding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioConfig {
    pub bucket_rule: PeriodBucketRule,
    #[serde(with = "amount_format")]
    pub default_new_cash: Decimal,
    pub seeds: Vec<SleeveSeed>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            bucket_rule: PeriodBucketRule::default(),
            default_new_cash: DEFAULT_NEW_CASH,
            seeds: default_seeds(),
        }
    }
}

impl PortfolioConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        debug!("Loading portfolio config from {}", path.display());
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: PortfolioConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bucket_rule.validate()?;
        if self.default_new_cash < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "defaultNewCash cannot be negative ({})",
                self.default_new_cash
            )));
        }

        let mut seen = HashSet::new();
        for seed in &self.seeds {
            if !seen.insert(seed.sleeve) {
                return Err(Error::InvalidConfigValue(format!(
                    "Sleeve {} is seeded more than once",
                    seed.sleeve.as_str()
                )));
            }
            validate_holdings(&seed.holdings).map_err(|e| {
                Error::InvalidConfigValue(format!("Seed for {}: {}", seed.sleeve.as_str(), e))
            })?;
        }
        Ok(())
    }

    pub fn seed_map(&self) -> HashMap<Sleeve, Vec<Holding>> {
        self.seeds
            .iter()
            .map(|seed| (seed.sleeve, seed.holdings.clone()))
            .collect()
    }
}

fn seed_holding(
    code: &str,
    name: &str,
    price: Decimal,
    quantity: Decimal,
    target_weight: Decimal,
) -> Holding {
    Holding {
        code: code.to_string(),
        name: name.to_string(),
        price,
        quantity,
        target_weight,
    }
}

fn default_seeds() -> Vec<SleeveSeed> {
    vec![
        SleeveSeed {
            sleeve: Sleeve::PersonalPension,
            holdings: vec![
                seed_holding("K200", "KOSPI200 ETF", dec!(50000), dec!(10), dec!(0.3)),
                seed_holding("NASDAQ", "나스닥 ETF", dec!(75000), dec!(5), dec!(0.2)),
                seed_holding("BOND", "채권 ETF", dec!(40000), dec!(8), dec!(0.2)),
                seed_holding("GLOBAL", "글로벌 ETF", dec!(60000), dec!(6), dec!(0.15)),
                seed_holding("REIT", "부동산 ETF", dec!(45000), dec!(7), dec!(0.15)),
            ],
        },
        SleeveSeed {
            sleeve: Sleeve::RetirementPension,
            holdings: vec![
                seed_holding("KLARGE", "국내대형주 ETF", dec!(55000), dec!(8), dec!(0.4)),
                seed_holding("BOND", "채권 ETF", dec!(42000), dec!(10), dec!(0.3)),
                seed_holding("OVERSEAS", "해외주식 ETF", dec!(65000), dec!(5), dec!(0.2)),
                seed_holding("KSMALL", "중소형주 ETF", dec!(48000), dec!(6), dec!(0.1)),
            ],
        },
        SleeveSeed {
            sleeve: Sleeve::Crypto,
            holdings: vec![
                seed_holding("BTC", "Bitcoin", dec!(60000000), dec!(0.1), dec!(0.5)),
                seed_holding("ETH", "Ethereum", dec!(4000000), dec!(2), dec!(0.3)),
                seed_holding("OTHERS", "Others", dec!(1000000), dec!(5), dec!(0.2)),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdings::target_weight_sum;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = PortfolioConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_new_cash, dec!(1000000));
        assert_eq!(config.bucket_rule, PeriodBucketRule::Monthly { rollover_day: 25 });

        let seeds = config.seed_map();
        assert_eq!(seeds.len(), 3);
        for sleeve in Sleeve::ALL {
            assert_eq!(target_weight_sum(&seeds[&sleeve]), Decimal::ONE);
        }
        assert_eq!(seeds[&Sleeve::Crypto][0].quantity, dec!(0.1));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config =
            PortfolioConfig::from_json_str(r#"{"bucketRule":{"kind":"daily"}}"#).unwrap();
        assert_eq!(config.bucket_rule, PeriodBucketRule::Daily);
        assert_eq!(config.seeds.len(), 3);
    }

    #[test]
    fn test_seed_amounts_accept_formatted_strings() {
        let json = r#"{
            "defaultNewCash": "500,000원",
            "seeds": [{
                "sleeve": "cryptocurrency",
                "holdings": [
                    {"code": "BTC", "name": "Bitcoin", "price": "₩60,000,000", "quantity": "0.25", "targetWeight": 1}
                ]
            }]
        }"#;
        let config = PortfolioConfig::from_json_str(json).unwrap();

        assert_eq!(config.default_new_cash, dec!(500000));
        let crypto = &config.seed_map()[&Sleeve::Crypto];
        assert_eq!(crypto[0].price, dec!(60000000));
        assert_eq!(crypto[0].quantity, dec!(0.25));
    }

    #[test]
    fn test_duplicate_codes_in_seed_are_rejected() {
        let json = r#"{"seeds": [{
            "sleeve": "personal_pension",
            "holdings": [
                {"code": "A", "name": "A", "price": 1, "quantity": 1, "targetWeight": 0.5},
                {"code": "A", "name": "A", "price": 1, "quantity": 1, "targetWeight": 0.5}
            ]
        }]}"#;
        let err = PortfolioConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_bad_rollover_day_is_rejected() {
        let err = PortfolioConfig::from_json_str(
            r#"{"bucketRule":{"kind":"monthly","rolloverDay":40}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"defaultNewCash": 250000, "seeds": []}}"#).unwrap();

        let config = PortfolioConfig::load(&path).unwrap();
        assert_eq!(config.default_new_cash, dec!(250000));
        assert!(config.seed_map().is_empty());
    }

    #[test]
    fn test_missing_file_is_config_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PortfolioConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigIO(_)));
    }
}
