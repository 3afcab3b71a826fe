//! Database models for valuation history.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::errors::StorageError;
use crate::holdings::model::parse_stored_decimal;
use sleevefolio_core::history::ValuationRecord;

#[derive(Queryable, Selectable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::valuation_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ValuationRecordDB {
    pub sleeve: String,
    pub period_key: String,
    pub total_value: String,
    pub deposit: String,
    pub recorded_at: NaiveDateTime,
}

impl From<&ValuationRecord> for ValuationRecordDB {
    fn from(domain: &ValuationRecord) -> Self {
        Self {
            sleeve: domain.sleeve.as_str().to_string(),
            period_key: domain.period_key.clone(),
            total_value: domain.total_value.to_string(),
            deposit: domain.deposit.to_string(),
            recorded_at: domain.recorded_at,
        }
    }
}

impl TryFrom<ValuationRecordDB> for ValuationRecord {
    type Error = StorageError;

    fn try_from(db: ValuationRecordDB) -> Result<Self, Self::Error> {
        let owner = format!("valuation {} of {}", db.period_key, db.sleeve);
        Ok(Self {
            sleeve: db
                .sleeve
                .parse()
                .map_err(|_| StorageError::CorruptedValue(format!("sleeve of {}", owner)))?,
            total_value: parse_stored_decimal(&db.total_value, "total_value", &owner)?,
            deposit: parse_stored_decimal(&db.deposit, "deposit", &owner)?,
            period_key: db.period_key,
            recorded_at: db.recorded_at,
        })
    }
}
