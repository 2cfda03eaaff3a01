use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::AppResult;
use crate::models::{Entry, NewEntry};
use crate::utils::date::format_user_date;

/// Business logic behind the "Add new entry" menu option.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, new: &NewEntry) -> AppResult<Entry> {
        let entry = insert_entry(&pool.conn, new)?;

        ttlog(
            &pool.conn,
            "add",
            &format!("entry {}", entry.id),
            &format!(
                "{} / {} ({} min) on {}",
                entry.employee,
                entry.task,
                entry.time,
                format_user_date(entry.date)
            ),
        )?;

        Ok(entry)
    }
}
