//! Formatting utilities used by the terminal screens.

/// Width of the key column in field dumps.
pub const KEY_WIDTH: usize = 9;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Upper-case the first character, lower-case the rest (`"employee"` → `"Employee"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One line of a field dump, e.g. `Employee : Marcus`.
pub fn field_line(key: &str, value: &str) -> String {
    format!("{}: {}", pad_right(&capitalize(key), KEY_WIDTH), value)
}
