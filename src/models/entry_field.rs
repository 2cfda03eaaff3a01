use crate::utils::date::to_db;
use chrono::NaiveDate;
use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

/// Editable columns of an entry. `id` is intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Employee,
    Task,
    Time,
    Notes,
    Date,
}

impl EntryField {
    /// Display and edit order.
    pub const ALL: [EntryField; 5] = [
        EntryField::Employee,
        EntryField::Task,
        EntryField::Time,
        EntryField::Notes,
        EntryField::Date,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "employee" => Some(Self::Employee),
            "task" => Some(Self::Task),
            "time" => Some(Self::Time),
            "notes" => Some(Self::Notes),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Task => "task",
            Self::Time => "time",
            Self::Notes => "notes",
            Self::Date => "date",
        }
    }

    /// Column name in the `entries` table.
    pub fn column(self) -> &'static str {
        self.key()
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Self::Notes)
    }

    pub fn edit_question(self) -> &'static str {
        match self {
            Self::Employee => "What is the new [employee] value?",
            Self::Task => "What is the new [task] value?",
            Self::Time => "What is the new [time] value? (minutes)",
            Self::Notes => "What is the new [additional notes] value? (optional)",
            Self::Date => "What is the new [date] value? (mm/dd/yyyy)",
        }
    }
}

/// A typed change to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Employee(String),
    Task(String),
    Time(i64),
    Notes(String),
    Date(NaiveDate),
}

impl FieldEdit {
    pub fn field(&self) -> EntryField {
        match self {
            Self::Employee(_) => EntryField::Employee,
            Self::Task(_) => EntryField::Task,
            Self::Time(_) => EntryField::Time,
            Self::Notes(_) => EntryField::Notes,
            Self::Date(_) => EntryField::Date,
        }
    }
}

impl ToSql for FieldEdit {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Employee(v) | Self::Task(v) | Self::Notes(v) => v.to_sql(),
            Self::Time(v) => v.to_sql(),
            Self::Date(d) => Ok(ToSqlOutput::from(to_db(*d))),
        }
    }
}
