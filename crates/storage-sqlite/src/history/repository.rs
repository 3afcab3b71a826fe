use diesel::prelude::*;
use std::sync::Arc;

use super::model::ValuationRecordDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::valuation_history;
use crate::schema::valuation_history::dsl::*;
use sleevefolio_core::errors::Result;
use sleevefolio_core::history::{HistoryRepositoryTrait, ValuationRecord};
use sleevefolio_core::Sleeve;

pub struct HistoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HistoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

impl HistoryRepositoryTrait for HistoryRepository {
    fn upsert_valuation(&self, record: &ValuationRecord) -> Result<ValuationRecord> {
        let row = ValuationRecordDB::from(record);
        let saved = self.writer.exec(move |conn| {
            diesel::replace_into(valuation_history::table)
                .values(&row)
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(row)
        })?;
        Ok(ValuationRecord::try_from(saved)?)
    }

    fn get_history(&self, target: Sleeve) -> Result<Vec<ValuationRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = valuation_history::table
            .filter(sleeve.eq(target.as_str()))
            .order(period_key.asc())
            .select(ValuationRecordDB::as_select())
            .load::<ValuationRecordDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| ValuationRecord::try_from(row).map_err(Into::into))
            .collect()
    }

    fn get_latest(&self, target: Sleeve) -> Result<Option<ValuationRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let row = valuation_history::table
            .filter(sleeve.eq(target.as_str()))
            .order(period_key.desc())
            .select(ValuationRecordDB::as_select())
            .first::<ValuationRecordDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        row.map(ValuationRecord::try_from)
            .transpose()
            .map_err(Into::into)
    }
}
