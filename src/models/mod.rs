pub mod entry;
pub mod entry_field;
pub mod query;

pub use entry::{Entry, NewEntry};
pub use entry_field::{EntryField, FieldEdit};
pub use query::Query;
