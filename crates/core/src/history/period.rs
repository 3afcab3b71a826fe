use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{DAY_PERIOD_FORMAT, DEFAULT_ROLLOVER_DAY, MONTH_PERIOD_FORMAT};
use crate::errors::{Error, Result, ValidationError};

/// Maps a calendar date to the label a valuation is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PeriodBucketRule {
    /// `YYYY-MM`; from `rollover_day` onwards the date belongs to the next month.
    #[serde(rename_all = "camelCase")]
    Monthly { rollover_day: u32 },
    /// `YYYY-MM-DD`.
    Daily,
}

impl Default for PeriodBucketRule {
    fn default() -> Self {
        PeriodBucketRule::Monthly {
            rollover_day: DEFAULT_ROLLOVER_DAY,
        }
    }
}

impl PeriodBucketRule {
    pub fn validate(&self) -> Result<()> {
        if let PeriodBucketRule::Monthly { rollover_day } = self {
            if !(1..=31).contains(rollover_day) {
                return Err(Error::InvalidConfigValue(format!(
                    "rollover day must be between 1 and 31, got {}",
                    rollover_day
                )));
            }
        }
        Ok(())
    }

    pub fn period_key(&self, date: NaiveDate) -> String {
        match *self {
            PeriodBucketRule::Daily => date.format(DAY_PERIOD_FORMAT).to_string(),
            PeriodBucketRule::Monthly { rollover_day } if date.day() >= rollover_day => {
                let (year, month) = if date.month() == 12 {
                    (date.year() + 1, 1)
                } else {
                    (date.year(), date.month() + 1)
                };
                format!("{:04}-{:02}", year, month)
            }
            PeriodBucketRule::Monthly { .. } => date.format(MONTH_PERIOD_FORMAT).to_string(),
        }
    }
}

/// Accepts `YYYY-MM` or `YYYY-MM-DD` naming a real month or day.
pub fn validate_period_key(key: &str) -> Result<()> {
    let invalid = || Error::from(ValidationError::InvalidPeriodKey(key.to_string()));
    let parsed = match key.len() {
        7 => NaiveDate::parse_from_str(&format!("{}-01", key), DAY_PERIOD_FORMAT)
            .map(|d| d.format(MONTH_PERIOD_FORMAT).to_string()),
        10 => NaiveDate::parse_from_str(key, DAY_PERIOD_FORMAT)
            .map(|d| d.format(DAY_PERIOD_FORMAT).to_string()),
        _ => return Err(invalid()),
    };
    match parsed {
        Ok(canonical) if canonical == key => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_24_stays_in_current_month() {
        let rule = PeriodBucketRule::default();
        assert_eq!(rule.period_key(date(2025, 3, 24)), "2025-03");
    }

    #[test]
    fn test_day_25_rolls_to_next_month() {
        let rule = PeriodBucketRule::default();
        assert_eq!(rule.period_key(date(2025, 3, 25)), "2025-04");
        assert_eq!(rule.period_key(date(2025, 3, 31)), "2025-04");
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let rule = PeriodBucketRule::default();
        assert_eq!(rule.period_key(date(2024, 12, 24)), "2024-12");
        assert_eq!(rule.period_key(date(2024, 12, 25)), "2025-01");
    }

    #[test]
    fn test_first_of_month() {
        let rule = PeriodBucketRule::default();
        assert_eq!(rule.period_key(date(2025, 1, 1)), "2025-01");
    }

    #[test]
    fn test_daily_rule() {
        assert_eq!(
            PeriodBucketRule::Daily.period_key(date(2025, 12, 28)),
            "2025-12-28"
        );
    }

    #[test]
    fn test_rollover_day_must_be_a_day_of_month() {
        assert!(PeriodBucketRule::Monthly { rollover_day: 0 }.validate().is_err());
        assert!(PeriodBucketRule::Monthly { rollover_day: 32 }.validate().is_err());
        assert!(PeriodBucketRule::Monthly { rollover_day: 1 }.validate().is_ok());
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule: PeriodBucketRule =
            serde_json::from_str(r#"{"kind":"monthly","rolloverDay":20}"#).unwrap();
        assert_eq!(rule, PeriodBucketRule::Monthly { rollover_day: 20 });
        let daily: PeriodBucketRule = serde_json::from_str(r#"{"kind":"daily"}"#).unwrap();
        assert_eq!(daily, PeriodBucketRule::Daily);
    }

    #[test]
    fn test_validate_period_key() {
        assert!(validate_period_key("2025-03").is_ok());
        assert!(validate_period_key("2025-03-31").is_ok());
        assert!(validate_period_key("2025-13").is_err());
        assert!(validate_period_key("2025-02-30").is_err());
        assert!(validate_period_key("2025-3-1").is_err());
        assert!(validate_period_key("March").is_err());
        assert!(validate_period_key("").is_err());
    }
}
