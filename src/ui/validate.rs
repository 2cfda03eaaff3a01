//! Pure input validators. The console turns their errors into error screens.

use crate::errors::InputError;
use crate::utils::date::parse_user_date;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Parse an integer, optionally requiring it to be a listed menu option.
pub fn parse_int(raw: &str, range: Option<&RangeInclusive<i64>>) -> Result<i64, InputError> {
    let value: i64 = raw.trim().parse().map_err(|_| InputError::NotInteger)?;

    match range {
        Some(r) if !r.contains(&value) => Err(InputError::NotMenuOption),
        _ => Ok(value),
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    parse_user_date(raw).ok_or(InputError::NotDate)
}
