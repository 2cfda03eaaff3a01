use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::update_field;
use crate::errors::AppResult;
use crate::models::{Entry, FieldEdit};

pub struct EditLogic;

impl EditLogic {
    /// Store a single-field change and return the merged copy of `entry`.
    pub fn apply(pool: &mut DbPool, entry: &Entry, edit: &FieldEdit) -> AppResult<Entry> {
        update_field(&pool.conn, entry.id, edit)?;

        let updated = entry.with_edit(edit);
        let field = edit.field();

        ttlog(
            &pool.conn,
            "edit",
            &format!("entry {}", entry.id),
            &format!(
                "{}: '{}' -> '{}'",
                field.key(),
                entry.value_of(field),
                updated.value_of(field)
            ),
        )?;

        Ok(updated)
    }
}
