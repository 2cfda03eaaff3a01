//! The "Results" screen: walks a result set one entry at a time.

use crate::core::browser::{BrowseCommand, Browser};
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::forms::edit_entry;
use crate::ui::session::Session;
use std::io::{BufRead, Write};

pub const NO_ENTRIES: &str = "No entries found.";

/// Browse `entries` until the user returns or deletes a record.
///
/// An empty result never opens the browser; the error screen is shown
/// instead. Deleting ends browsing, so the result list is dropped with it.
pub fn browse<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    entries: Vec<Entry>,
) -> AppResult<()> {
    let Some(mut browser) = Browser::new(entries) else {
        return session.console.error(NO_ENTRIES);
    };

    loop {
        session.console.title("Results")?;
        session.console.line(format!(
            "Result {} of {}\n",
            browser.index() + 1,
            browser.len()
        ))?;
        session.console.entry(browser.current())?;
        session
            .console
            .line("\n[B]ack, [N]ext, [E]dit, [D]elete, [R]eturn to Main Menu")?;

        let input = session.console.read_text()?;
        match BrowseCommand::parse(&input) {
            Some(BrowseCommand::Back) => browser.back(),
            Some(BrowseCommand::Next) => browser.next(),
            Some(BrowseCommand::Edit) => {
                let updated = edit_entry(session, browser.current())?;
                browser.replace_current(updated);
            }
            Some(BrowseCommand::Delete) => {
                DeleteLogic::apply(&mut session.pool, browser.current())?;
                return Ok(());
            }
            Some(BrowseCommand::Return) => return Ok(()),
            None => {}
        }
    }
}
