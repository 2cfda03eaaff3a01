//! Line-based terminal I/O.
//!
//! Every screen of the menu goes through a [`Console`], which owns the input
//! and output streams. The binary wires it to stdin/stdout; tests use
//! in-memory buffers.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::ui::validate;
use crate::utils::field_line;
use chrono::NaiveDate;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

const RULE_WIDTH: usize = 35;
const CLEAR: &str = "\x1b[2J\x1b[1;1H";

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    separator: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
            separator: "-".to_string(),
        }
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        if !separator.is_empty() {
            self.separator = separator.to_string();
        }
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn clear(&mut self) -> AppResult<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR)?;
        }
        Ok(())
    }

    /// Clear the screen and print a framed title.
    pub fn title(&mut self, title: &str) -> AppResult<()> {
        self.clear()?;
        let rule = self.separator.repeat(RULE_WIDTH);
        writeln!(self.output, "{rule}\n{title}\n{rule}\n")?;
        Ok(())
    }

    pub fn line(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// `1) first`, `2) second`, ...
    pub fn options<T: Display>(&mut self, items: &[T]) -> AppResult<()> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, item)?;
        }
        Ok(())
    }

    pub fn fields(&mut self, fields: &[(&str, String)]) -> AppResult<()> {
        for (key, value) in fields {
            writeln!(self.output, "{}", field_line(key, value))?;
        }
        Ok(())
    }

    pub fn entry(&mut self, entry: &Entry) -> AppResult<()> {
        self.fields(&entry.fields())
    }

    /// Print the prompt and read one line, without its line ending.
    pub fn read_line(&mut self) -> AppResult<String> {
        write!(self.output, "\n> ")?;
        self.output.flush()?;
        self.next_line()
    }

    /// A line of input with surrounding whitespace removed.
    pub fn read_text(&mut self) -> AppResult<String> {
        Ok(self.read_line()?.trim().to_string())
    }

    /// An integer, or `None` after the error screen was shown.
    pub fn read_int(&mut self, range: Option<RangeInclusive<i64>>) -> AppResult<Option<i64>> {
        let raw = self.read_line()?;
        match validate::parse_int(&raw, range.as_ref()) {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                self.error(e)?;
                Ok(None)
            }
        }
    }

    /// A 1-based choice among `count` listed options.
    pub fn read_choice(&mut self, count: usize) -> AppResult<Option<usize>> {
        let max = i64::try_from(count).unwrap_or(i64::MAX);
        Ok(self
            .read_int(Some(1..=max))?
            .and_then(|v| usize::try_from(v).ok()))
    }

    /// A `mm/dd/yyyy` date, or `None` after the error screen was shown.
    pub fn read_date(&mut self) -> AppResult<Option<NaiveDate>> {
        let raw = self.read_line()?;
        match validate::parse_date(&raw) {
            Ok(d) => Ok(Some(d)),
            Err(e) => {
                self.error(e)?;
                Ok(None)
            }
        }
    }

    /// Blocking error screen: waits for Enter before returning.
    pub fn error(&mut self, message: impl Display) -> AppResult<()> {
        self.title("Error")?;
        writeln!(self.output, "{}", message)?;
        write!(self.output, "\nPress Enter to continue... ")?;
        self.output.flush()?;
        self.next_line()?;
        Ok(())
    }

    /// Bytes that are not valid UTF-8 are replaced, so a bad line is just
    /// bad input for the prompt that asked for it.
    fn next_line(&mut self) -> AppResult<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(AppError::InputClosed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
