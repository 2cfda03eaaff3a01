use worklog::core::browser::{BrowseCommand, Browser};
use worklog::models::{Entry, FieldEdit};

mod common;
use common::ymd;

fn entries(n: i64) -> Vec<Entry> {
    (1..=n)
        .map(|id| Entry {
            id,
            employee: format!("Employee {id}"),
            task: "Task".into(),
            time: 10 * id,
            notes: String::new(),
            date: ymd(2019, 1, 1),
        })
        .collect()
}

#[test]
fn test_empty_result_is_never_browsed() {
    assert!(Browser::new(Vec::new()).is_none());
}

#[test]
fn test_starts_at_first_entry() {
    let browser = Browser::new(entries(3)).unwrap();
    assert_eq!(browser.index(), 0);
    assert_eq!(browser.len(), 3);
    assert_eq!(browser.current().id, 1);
}

#[test]
fn test_back_at_start_is_noop() {
    let mut browser = Browser::new(entries(3)).unwrap();
    browser.back();
    browser.back();
    assert_eq!(browser.index(), 0);
}

#[test]
fn test_next_at_end_is_noop() {
    let mut browser = Browser::new(entries(3)).unwrap();
    for _ in 0..10 {
        browser.next();
    }
    assert_eq!(browser.index(), 2);
    assert_eq!(browser.current().id, 3);
}

#[test]
fn test_index_stays_in_bounds_for_any_walk() {
    let mut browser = Browser::new(entries(4)).unwrap();
    let walk = "nnbnnnnbbbbbnbnnnnn";
    for step in walk.chars() {
        match step {
            'n' => browser.next(),
            _ => browser.back(),
        }
        assert!(browser.index() < browser.len());
    }
}

#[test]
fn test_single_entry_never_moves() {
    let mut browser = Browser::new(entries(1)).unwrap();
    browser.next();
    browser.back();
    browser.next();
    assert_eq!(browser.index(), 0);
}

#[test]
fn test_replace_keeps_order() {
    let mut browser = Browser::new(entries(3)).unwrap();
    browser.next();

    let edited = browser.current().with_edit(&FieldEdit::Task("Edited".into()));
    browser.replace_current(edited);

    let ids: Vec<i64> = browser.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(browser.entries()[1].task, "Edited");
    assert_eq!(browser.index(), 1);
}

#[test]
fn test_parse_commands() {
    assert_eq!(BrowseCommand::parse("b"), Some(BrowseCommand::Back));
    assert_eq!(BrowseCommand::parse("N"), Some(BrowseCommand::Next));
    assert_eq!(BrowseCommand::parse(" edit "), Some(BrowseCommand::Edit));
    assert_eq!(BrowseCommand::parse("Delete"), Some(BrowseCommand::Delete));
    assert_eq!(BrowseCommand::parse("r"), Some(BrowseCommand::Return));
    assert_eq!(BrowseCommand::parse("x"), None);
    assert_eq!(BrowseCommand::parse(""), None);
}
