use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entry;
use crate::errors::AppResult;
use crate::models::Entry;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, entry: &Entry) -> AppResult<()> {
        delete_entry(&pool.conn, entry.id)?;

        ttlog(
            &pool.conn,
            "del",
            &format!("entry {}", entry.id),
            &format!("Deleted {} / {}", entry.employee, entry.task),
        )?;

        Ok(())
    }
}
