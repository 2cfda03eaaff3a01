//! Field prompts for the add and edit screens.

use crate::core::add::AddLogic;
use crate::core::edit::EditLogic;
use crate::errors::{AppResult, InputError};
use crate::models::{Entry, EntryField, FieldEdit, NewEntry};
use crate::ui::session::Session;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const ADD_TITLE: &str = "Add New Entry";
const EDIT_TITLE: &str = "Edit Entry";

/// Ask for text until something non-empty is typed. Optional fields accept
/// the first answer, empty or not.
fn prompt_text<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    title: &str,
    question: &str,
    optional: bool,
) -> AppResult<String> {
    loop {
        session.console.title(title)?;
        session.console.line(question)?;
        let value = session.console.read_text()?;
        if !value.is_empty() || optional {
            return Ok(value);
        }
    }
}

/// Ask for a number of minutes. Zero counts as no answer.
fn prompt_minutes<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    title: &str,
    question: &str,
) -> AppResult<i64> {
    loop {
        session.console.title(title)?;
        session.console.line(question)?;
        if let Some(v) = session.console.read_int(None)?
            && v != 0
        {
            return Ok(v);
        }
    }
}

fn prompt_date<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    title: &str,
    question: &str,
) -> AppResult<NaiveDate> {
    loop {
        session.console.title(title)?;
        session.console.line(question)?;
        if let Some(d) = session.console.read_date()? {
            return Ok(d);
        }
    }
}

/// Collect employee, task, time and notes, in that order. The date is left
/// for the store to fill in.
pub fn collect_new_entry<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> AppResult<NewEntry> {
    let employee = prompt_text(session, ADD_TITLE, "What is your name?", false)?;
    let task = prompt_text(session, ADD_TITLE, "What is the task?", false)?;
    let time = prompt_minutes(session, ADD_TITLE, "How long did you work on it? (minutes)")?;
    let notes = prompt_text(session, ADD_TITLE, "Any additional notes? (optional)", true)?;

    Ok(NewEntry::new(employee, task, time, notes))
}

pub fn add_entry<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Entry> {
    let new = collect_new_entry(session)?;
    AddLogic::apply(&mut session.pool, &new)
}

/// Ask which field to change. `id` and unknown keys are rejected.
fn prompt_edit_key<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    entry: &Entry,
) -> AppResult<EntryField> {
    loop {
        session.console.title(EDIT_TITLE)?;
        session.console.line("Type the key you want to edit.\n")?;
        session.console.fields(&entry.editable_fields())?;

        let key = session.console.read_text()?;
        match EntryField::from_key(&key) {
            Some(field) => return Ok(field),
            None => session.console.error(InputError::NotEditKey)?,
        }
    }
}

/// Edit one field of `entry`, store it and return the updated copy.
pub fn edit_entry<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    entry: &Entry,
) -> AppResult<Entry> {
    let field = prompt_edit_key(session, entry)?;
    let question = field.edit_question();

    let edit = match field {
        EntryField::Employee => {
            FieldEdit::Employee(prompt_text(session, EDIT_TITLE, question, false)?)
        }
        EntryField::Task => FieldEdit::Task(prompt_text(session, EDIT_TITLE, question, false)?),
        EntryField::Time => FieldEdit::Time(prompt_minutes(session, EDIT_TITLE, question)?),
        EntryField::Notes => FieldEdit::Notes(prompt_text(
            session,
            EDIT_TITLE,
            question,
            field.is_optional(),
        )?),
        EntryField::Date => FieldEdit::Date(prompt_date(session, EDIT_TITLE, question)?),
    };

    EditLogic::apply(&mut session.pool, entry, &edit)
}
