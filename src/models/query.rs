use chrono::NaiveDate;

/// A filter over the `entries` table, produced by one of the search modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every entry.
    All,
    /// Employee is one of the names. An empty set matches nothing.
    EmployeeIn(Vec<String>),
    /// Employee equals the name exactly.
    Employee(String),
    Date(NaiveDate),
    /// Inclusive on both ends.
    DateRange { begin: NaiveDate, end: NaiveDate },
    /// Exact number of minutes.
    Time(i64),
    /// Task or notes contains the term.
    Term(String),
}
