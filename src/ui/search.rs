//! Interactive side of the five search modes. Each one returns the matching
//! entries as a plain `Vec<Entry>`.

use crate::core::query::{EmployeeMatch, SearchMode};
use crate::db::queries::{distinct_dates, distinct_employees, distinct_times, find_entries};
use crate::errors::AppResult;
use crate::models::{Entry, Query};
use crate::ui::session::Session;
use crate::utils::date::format_user_date;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub type SearchAction<R, W> = fn(&mut Session<R, W>) -> AppResult<Vec<Entry>>;

pub fn action_for<R: BufRead, W: Write>(mode: SearchMode) -> SearchAction<R, W> {
    match mode {
        SearchMode::Employee => find_by_employee::<R, W>,
        SearchMode::Date => find_by_date::<R, W>,
        SearchMode::DateRange => find_by_date_range::<R, W>,
        SearchMode::Time => find_by_time::<R, W>,
        SearchMode::Term => find_by_term::<R, W>,
    }
}

pub fn find_by_employee<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> AppResult<Vec<Entry>> {
    let employees = distinct_employees(&session.pool.conn)?;

    let input = loop {
        session.console.title(SearchMode::Employee.title())?;
        session.console.line("Suggestions:\n")?;
        session.console.options(&employees)?;
        session.console.line("\nType in a name from the list above.")?;
        let input = session.console.read_text()?;
        if !input.is_empty() {
            break input;
        }
    };

    let matched = EmployeeMatch::find(&employees, &input);
    let query = match &matched {
        EmployeeMatch::Multiple(names) => loop {
            session.console.title("Found Multiple Names")?;
            session
                .console
                .line("Select one of the following employees.\n")?;
            session.console.options(names)?;
            if let Some(choice) = session.console.read_choice(names.len())?
                && let Some(q) = matched.pick(choice)
            {
                break q;
            }
        },
        _ => matched
            .clone()
            .into_query()
            .unwrap_or_else(|| Query::EmployeeIn(Vec::new())),
    };

    find_entries(&session.pool.conn, &query)
}

pub fn find_by_date<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Vec<Entry>> {
    let dates = distinct_dates(&session.pool.conn)?;
    if dates.is_empty() {
        return Ok(Vec::new());
    }
    let shown: Vec<String> = dates.iter().map(|d| format_user_date(*d)).collect();

    let date = loop {
        session.console.title(SearchMode::Date.title())?;
        session.console.options(&shown)?;
        if let Some(choice) = session.console.read_choice(dates.len())? {
            break dates[choice - 1];
        }
    };

    find_entries(&session.pool.conn, &Query::Date(date))
}

fn prompt_range_end<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    label: &str,
) -> AppResult<NaiveDate> {
    loop {
        session.console.title(SearchMode::DateRange.title())?;
        session.console.line(format!("{} date (mm/dd/yyyy):", label))?;
        if let Some(d) = session.console.read_date()? {
            return Ok(d);
        }
    }
}

pub fn find_by_date_range<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> AppResult<Vec<Entry>> {
    let begin = prompt_range_end(session, "Begin")?;
    let end = prompt_range_end(session, "End")?;

    find_entries(&session.pool.conn, &Query::DateRange { begin, end })
}

pub fn find_by_time<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Vec<Entry>> {
    let times = distinct_times(&session.pool.conn)?;

    let minutes = loop {
        session.console.title(SearchMode::Time.title())?;
        session.console.line("Suggestions:\n")?;
        for t in &times {
            session.console.line(format!("- {}", t))?;
        }
        session
            .console
            .line("\nType in an amount of minutes from the list above.")?;
        if let Some(v) = session.console.read_int(None)?
            && v != 0
        {
            break v;
        }
    };

    find_entries(&session.pool.conn, &Query::Time(minutes))
}

pub fn find_by_term<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Vec<Entry>> {
    let term = loop {
        session.console.title(SearchMode::Term.title())?;
        session.console.line("Please type a title or note.")?;
        let term = session.console.read_text()?;
        if !term.is_empty() {
            break term;
        }
    };

    find_entries(&session.pool.conn, &Query::Term(term))
}
