//! Search-mode logic that does not need the terminal.

use crate::models::Query;

/// Outcome of matching typed input against the known employee names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeMatch {
    None,
    Single(String),
    /// Two or more names matched; the user has to pick one.
    Multiple(Vec<String>),
}

impl EmployeeMatch {
    /// Case-insensitive substring match of `input` against each name.
    pub fn find(employees: &[String], input: &str) -> Self {
        let needle = input.trim().to_lowercase();
        let mut matches: Vec<String> = employees
            .iter()
            .filter(|e| e.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match matches.len() {
            0 => Self::None,
            1 => Self::Single(matches.remove(0)),
            _ => Self::Multiple(matches),
        }
    }

    /// Query for an unambiguous match. `Multiple` needs a pick first, see
    /// [`EmployeeMatch::pick`].
    pub fn into_query(self) -> Option<Query> {
        match self {
            Self::None => Some(Query::EmployeeIn(Vec::new())),
            Self::Single(name) => Some(Query::EmployeeIn(vec![name])),
            Self::Multiple(_) => None,
        }
    }

    /// Exact-name query for the 1-based `choice` among multiple matches.
    pub fn pick(&self, choice: usize) -> Option<Query> {
        match self {
            Self::Multiple(names) => choice
                .checked_sub(1)
                .and_then(|i| names.get(i))
                .map(|name| Query::Employee(name.clone())),
            _ => None,
        }
    }
}

/// The five ways of searching the log, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Employee,
    Date,
    DateRange,
    Time,
    Term,
}

impl SearchMode {
    pub const ALL: [SearchMode; 5] = [
        SearchMode::Employee,
        SearchMode::Date,
        SearchMode::DateRange,
        SearchMode::Time,
        SearchMode::Term,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Find by employee",
            Self::Date => "Find by date",
            Self::DateRange => "Find by date range",
            Self::Time => "Find by time",
            Self::Term => "Find by term",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Employee => "Find By Employee",
            Self::Date => "Find By Date",
            Self::DateRange => "Find By Date Range",
            Self::Time => "Find By Time",
            Self::Term => "Find By Term",
        }
    }
}
