//! Date helpers.
//!
//! Users type and read dates as `mm/dd/yyyy`; the store keeps them as
//! `YYYY-MM-DD` so that text comparison follows calendar order.

use chrono::NaiveDate;

/// Format used for prompts and field dumps.
pub const USER_FORMAT: &str = "%m/%d/%Y";

/// Format of the `entries.date` column.
pub const DB_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user-supplied `mm/dd/yyyy` date. The year must have four digits.
pub fn parse_user_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let mut parts = s.split('/');
    let (Some(_), Some(_), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    NaiveDate::parse_from_str(s, USER_FORMAT).ok()
}

pub fn format_user_date(d: NaiveDate) -> String {
    d.format(USER_FORMAT).to_string()
}

pub fn to_db(d: NaiveDate) -> String {
    d.format(DB_FORMAT).to_string()
}

pub fn from_db(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DB_FORMAT).ok()
}
