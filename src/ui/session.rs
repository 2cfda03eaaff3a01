use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::console::Console;
use std::io::{BufRead, Write};

/// Everything an interactive session works with: the terminal and the store.
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub pool: DbPool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, pool: DbPool) -> Self {
        Self { console, pool }
    }

    /// Release the store. Called once the menu loop has ended.
    pub fn close(self) -> AppResult<()> {
        self.pool.close()
    }
}
