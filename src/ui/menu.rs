//! Menu controller: the main menu and the search sub-menu.
//!
//! Both menus are ordered tables from option number to a handler function,
//! built once when [`run`] starts.

use crate::core::query::SearchMode;
use crate::db::queries::count_entries;
use crate::errors::AppResult;
use crate::ui::browse::browse;
use crate::ui::forms::add_entry;
use crate::ui::search::{SearchAction, action_for};
use crate::ui::session::Session;
use std::io::{BufRead, Write};

pub const NO_PREVIOUS_ENTRIES: &str = "No previous entries. Please add an entry first.";

/// What the main loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type MenuAction<R, W> = fn(&mut Session<R, W>) -> AppResult<Flow>;

pub struct MenuItem<A> {
    pub label: &'static str,
    pub action: A,
}

pub fn main_menu<R: BufRead, W: Write>() -> Vec<MenuItem<MenuAction<R, W>>> {
    vec![
        MenuItem {
            label: "Add new entry",
            action: add::<R, W>,
        },
        MenuItem {
            label: "View previous entries",
            action: view_entries::<R, W>,
        },
        MenuItem {
            label: "Quit program",
            action: quit::<R, W>,
        },
    ]
}

pub fn search_menu<R: BufRead, W: Write>() -> Vec<MenuItem<SearchAction<R, W>>> {
    SearchMode::ALL
        .iter()
        .map(|mode| MenuItem {
            label: mode.label(),
            action: action_for::<R, W>(*mode),
        })
        .collect()
}

fn labels<A>(items: &[MenuItem<A>]) -> Vec<&'static str> {
    items.iter().map(|i| i.label).collect()
}

fn add<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    add_entry(session)?;
    Ok(Flow::Continue)
}

/// Search sub-menu. One search and its browsing, then back to the main menu.
pub fn view_entries<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    if count_entries(&session.pool.conn)? == 0 {
        session.console.error(NO_PREVIOUS_ENTRIES)?;
        return Ok(Flow::Continue);
    }

    let searches = search_menu::<R, W>();
    let return_option = searches.len() + 1;

    loop {
        session.console.title("View Previous Entries")?;
        session.console.options(&labels(&searches))?;
        session
            .console
            .line(format!("\n{}) Return to Main Menu", return_option))?;

        let Some(choice) = session.console.read_choice(return_option)? else {
            continue;
        };
        if choice == return_option {
            return Ok(Flow::Continue);
        }

        let results = (searches[choice - 1].action)(session)?;
        browse(session, results)?;
        return Ok(Flow::Continue);
    }
}

fn quit<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    session.console.clear()?;
    Ok(Flow::Quit)
}

/// Main menu loop. Returns when the user quits.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let menu = main_menu::<R, W>();

    loop {
        session.console.title("Main Menu")?;
        session.console.options(&labels(&menu))?;

        let Some(choice) = session.console.read_choice(menu.len())? else {
            continue;
        };

        if (menu[choice - 1].action)(session)? == Flow::Quit {
            return Ok(());
        }
    }
}
