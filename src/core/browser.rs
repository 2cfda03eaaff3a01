//! Result browser state: one record at a time over an ordered result list.

use crate::models::Entry;

/// A browser command typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Back,
    Next,
    Edit,
    Delete,
    Return,
}

impl BrowseCommand {
    /// Accepts the initial (`b`) or the whole word (`back`), any case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "b" | "back" => Some(Self::Back),
            "n" | "next" => Some(Self::Next),
            "e" | "edit" => Some(Self::Edit),
            "d" | "delete" => Some(Self::Delete),
            "r" | "return" => Some(Self::Return),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Browser {
    entries: Vec<Entry>,
    index: usize,
}

impl Browser {
    /// `None` for an empty result: there is nothing to browse.
    pub fn new(entries: Vec<Entry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries, index: 0 })
    }

    pub fn current(&self) -> &Entry {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Never zero; `new` refuses an empty list.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
        }
    }

    /// Swap the current record for its edited version; order is kept.
    pub fn replace_current(&mut self, entry: Entry) {
        self.entries[self.index] = entry;
    }
}
