#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use worklog::db::pool::DbPool;
use worklog::db::queries::insert_entry;
use worklog::models::{Entry, NewEntry};
use worklog::ui::{Console, Session};

pub type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// The worklog binary with HOME pointed at a scratch directory, so no real
/// configuration file is read.
pub fn wl(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_worklog_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("worklog");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn marcus() -> NewEntry {
    NewEntry::new("Marcus", "Programming", 100, "Project #4")
}

pub fn menno() -> NewEntry {
    NewEntry::new("Menno", "Designing", 50, "VVD")
}

pub fn memory_pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

pub fn seed(pool: &DbPool, entries: &[NewEntry]) -> Vec<Entry> {
    entries
        .iter()
        .map(|e| insert_entry(&pool.conn, e).expect("insert entry"))
        .collect()
}

/// A session whose keyboard is the given lines.
pub fn scripted(pool: DbPool, lines: &[&str]) -> TestSession {
    let mut input = lines.join("\n");
    if !lines.is_empty() {
        input.push('\n');
    }
    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    Session::new(console, pool)
}

pub fn screen(session: &TestSession) -> String {
    String::from_utf8_lossy(session.console.output()).to_string()
}
