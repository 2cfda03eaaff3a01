use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::menu;
use crate::ui::{Console, Session};
use std::io::{self, IsTerminal};

/// Run the interactive menu on stdin/stdout until the user quits.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database_path().to_string_lossy())?;

    let stdout = io::stdout();
    let clear = cfg.clear_screen && stdout.is_terminal();
    let console = Console::new(io::stdin().lock(), stdout.lock())
        .with_clear_screen(clear)
        .with_separator(&cfg.separator_char);

    let mut session = Session::new(console, pool);

    match menu::run(&mut session) {
        // No more input can arrive: end the session like Quit does.
        Ok(()) | Err(AppError::InputClosed) => session.close(),
        Err(e) => {
            session.close()?;
            Err(e)
        }
    }
}
