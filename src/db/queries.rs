//! Entry store: every SQL statement that touches the `entries` table.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, FieldEdit, NewEntry, Query};
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

const SELECT_ENTRIES: &str = "SELECT id, employee, task, time, notes, date FROM entries";

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;

    let date = date::from_db(&date_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        employee: row.get("employee")?,
        task: row.get("task")?,
        time: row.get("time")?,
        notes: row.get("notes")?,
        date,
    })
}

/// Insert a new entry and return it with its assigned id.
///
/// A missing date is resolved to today's date here, per row.
pub fn insert_entry(conn: &Connection, new: &NewEntry) -> AppResult<Entry> {
    let date = new.date.unwrap_or_else(date::today);

    conn.execute(
        "INSERT INTO entries (employee, task, time, notes, date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![new.employee, new.task, new.time, new.notes, date::to_db(date)],
    )?;

    Ok(Entry {
        id: conn.last_insert_rowid(),
        employee: new.employee.clone(),
        task: new.task.clone(),
        time: new.time,
        notes: new.notes.clone(),
        date,
    })
}

pub fn get_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?)
}

/// Update a single column of one entry.
pub fn update_field(conn: &Connection, id: i64, edit: &FieldEdit) -> AppResult<()> {
    // Column names come from `EntryField`, never from user input.
    let sql = format!(
        "UPDATE entries SET {} = ?1 WHERE id = ?2",
        edit.field().column()
    );

    let changed = conn.execute(&sql, params![edit, id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

/// Distinct employee names, ascending.
pub fn distinct_employees(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT DISTINCT employee FROM entries ORDER BY employee ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct dates, most recent first.
pub fn distinct_dates(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare_cached("SELECT DISTINCT date FROM entries ORDER BY date DESC")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let d = r?;
        out.push(date::from_db(&d).ok_or(AppError::InvalidDate(d))?);
    }
    Ok(out)
}

/// Distinct minute values, largest first.
pub fn distinct_times(conn: &Connection) -> AppResult<Vec<i64>> {
    let mut stmt = conn.prepare_cached("SELECT DISTINCT time FROM entries ORDER BY time DESC")?;
    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Escape `LIKE` wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// WHERE clause and its parameters for a query. `None` means the query
/// cannot match anything.
fn where_clause(query: &Query) -> Option<(String, Vec<Value>)> {
    let out = match query {
        Query::All => (String::new(), Vec::new()),
        Query::EmployeeIn(names) => {
            if names.is_empty() {
                return None;
            }
            let placeholders = vec!["?"; names.len()].join(",");
            (
                format!(" WHERE employee IN ({})", placeholders),
                names.iter().cloned().map(Value::Text).collect(),
            )
        }
        Query::Employee(name) => (
            " WHERE employee = ?".to_string(),
            vec![Value::Text(name.clone())],
        ),
        Query::Date(d) => (
            " WHERE date = ?".to_string(),
            vec![Value::Text(date::to_db(*d))],
        ),
        Query::DateRange { begin, end } => (
            " WHERE date BETWEEN ? AND ?".to_string(),
            vec![
                Value::Text(date::to_db(*begin)),
                Value::Text(date::to_db(*end)),
            ],
        ),
        Query::Time(minutes) => (" WHERE time = ?".to_string(), vec![Value::Integer(*minutes)]),
        Query::Term(term) => (
            r" WHERE task LIKE ?1 ESCAPE '\' OR notes LIKE ?1 ESCAPE '\'".to_string(),
            vec![Value::Text(like_pattern(term))],
        ),
    };
    Some(out)
}

/// Run a query. Results keep insertion order.
pub fn find_entries(conn: &Connection, query: &Query) -> AppResult<Vec<Entry>> {
    let Some((clause, values)) = where_clause(query) else {
        return Ok(Vec::new());
    };

    let sql = format!("{SELECT_ENTRIES}{clause} ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
