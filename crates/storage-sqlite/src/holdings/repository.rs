use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::{HoldingDB, SleeveStateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{holdings, sleeve_state};
use sleevefolio_core::errors::Result;
use sleevefolio_core::holdings::{Holding, HoldingsRepositoryTrait};
use sleevefolio_core::Sleeve;

pub struct HoldingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

impl HoldingsRepositoryTrait for HoldingsRepository {
    fn get_holdings(&self, sleeve: Sleeve) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = holdings::table
            .filter(holdings::sleeve.eq(sleeve.as_str()))
            .order((holdings::position.asc(), holdings::code.asc()))
            .select(HoldingDB::as_select())
            .load::<HoldingDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| Holding::try_from(row).map_err(Into::into))
            .collect()
    }

    fn is_initialized(&self, sleeve: Sleeve) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let marker = sleeve_state::table
            .find(sleeve.as_str())
            .select(SleeveStateDB::as_select())
            .first::<SleeveStateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(marker.is_some())
    }

    fn upsert_holdings(&self, sleeve: Sleeve, holdings_to_save: &[Holding]) -> Result<usize> {
        let now = Utc::now().naive_utc();
        let marker = SleeveStateDB {
            sleeve: sleeve.as_str().to_string(),
            initialized_at: now,
        };
        let rows: Vec<HoldingDB> = holdings_to_save
            .iter()
            .enumerate()
            .map(|(position, holding)| {
                HoldingDB::from_domain(sleeve, holding, position as i32, now)
            })
            .collect();

        let written = self.writer.exec(move |conn| {
            diesel::insert_or_ignore_into(sleeve_state::table)
                .values(&marker)
                .execute(conn)
                .map_err(StorageError::from)?;

            let mut affected = 0;
            for row in &rows {
                affected += diesel::replace_into(holdings::table)
                    .values(row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
            }
            Ok(affected)
        })?;
        debug!("Wrote {} holding rows for {}", written, sleeve);
        Ok(written)
    }

    fn delete_holding(&self, sleeve: Sleeve, code: &str) -> Result<usize> {
        let code = code.to_string();
        self.writer.exec(move |conn| {
            Ok(diesel::delete(
                holdings::table
                    .filter(holdings::sleeve.eq(sleeve.as_str()))
                    .filter(holdings::code.eq(code)),
            )
            .execute(conn)
            .map_err(StorageError::from)?)
        })
    }
}
