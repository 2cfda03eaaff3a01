pub mod date;
pub mod formatting;
pub mod path;

pub use formatting::field_line;
