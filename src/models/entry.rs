use super::entry_field::{EntryField, FieldEdit};
use crate::utils::date::format_user_date;
use chrono::NaiveDate;

/// A stored work-log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,          // ⇔ entries.id (assigned by SQLite, never edited)
    pub employee: String, // ⇔ entries.employee
    pub task: String,     // ⇔ entries.task
    pub time: i64,        // ⇔ entries.time (minutes)
    pub notes: String,    // ⇔ entries.notes ('' when none)
    pub date: NaiveDate,  // ⇔ entries.date (TEXT "YYYY-MM-DD")
}

/// An entry that has not been stored yet.
///
/// `date: None` means "today", resolved when the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub employee: String,
    pub task: String,
    pub time: i64,
    pub notes: String,
    pub date: Option<NaiveDate>,
}

impl NewEntry {
    pub fn new(
        employee: impl Into<String>,
        task: impl Into<String>,
        time: i64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            employee: employee.into(),
            task: task.into(),
            time,
            notes: notes.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl Entry {
    /// Ordered `(key, value)` pairs, `id` first. This is the single shape every
    /// screen renders from.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("id", self.id.to_string())];
        out.extend(
            EntryField::ALL
                .iter()
                .map(|f| (f.key(), self.value_of(*f))),
        );
        out
    }

    /// Same as [`Entry::fields`] without the id.
    pub fn editable_fields(&self) -> Vec<(&'static str, String)> {
        EntryField::ALL
            .iter()
            .map(|f| (f.key(), self.value_of(*f)))
            .collect()
    }

    pub fn value_of(&self, field: EntryField) -> String {
        match field {
            EntryField::Employee => self.employee.clone(),
            EntryField::Task => self.task.clone(),
            EntryField::Time => self.time.to_string(),
            EntryField::Notes => self.notes.clone(),
            EntryField::Date => format_user_date(self.date),
        }
    }

    /// Copy of this entry with one field replaced.
    pub fn with_edit(&self, edit: &FieldEdit) -> Entry {
        let mut out = self.clone();
        match edit {
            FieldEdit::Employee(v) => out.employee = v.clone(),
            FieldEdit::Task(v) => out.task = v.clone(),
            FieldEdit::Time(v) => out.time = *v,
            FieldEdit::Notes(v) => out.notes = v.clone(),
            FieldEdit::Date(v) => out.date = *v,
        }
        out
    }
}
