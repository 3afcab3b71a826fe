use diesel::SqliteConnection;
use std::sync::Arc;

use super::{get_connection, DbPool};
use crate::errors::StorageError;
use sleevefolio_core::errors::Result;

/// Serializes writes: every job runs inside its own IMMEDIATE transaction, so
/// the write lock is taken up front and a failed job leaves nothing behind.
#[derive(Clone)]
pub struct WriteHandle {
    pool: Arc<DbPool>,
}

impl WriteHandle {
    /// Executes a database job on a pooled connection.
    ///
    /// The job's error, core or Diesel, rolls the transaction back and is
    /// returned to the caller as a core error.
    pub fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T>,
    {
        let mut conn = get_connection(&self.pool)?;
        conn.immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
            .map_err(|e: StorageError| e.into())
    }
}

pub fn create_writer(pool: Arc<DbPool>) -> WriteHandle {
    WriteHandle { pool }
}
