use worklog::config::Config;
use worklog::core::query::{EmployeeMatch, SearchMode};
use worklog::errors::InputError;
use worklog::models::{EntryField, Query};
use worklog::ui::validate::{parse_date, parse_int};
use worklog::utils::date::{format_user_date, parse_user_date};
use worklog::utils::formatting::capitalize;
use worklog::utils::field_line;

mod common;
use common::ymd;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_int() {
    assert_eq!(parse_int("1", None), Ok(1));
    assert_eq!(parse_int(" 42 ", None), Ok(42));
    assert_eq!(parse_int("-5", None), Ok(-5));
    assert_eq!(parse_int("x", None), Err(InputError::NotInteger));
    assert_eq!(parse_int("", None), Err(InputError::NotInteger));
    assert_eq!(parse_int("1.5", None), Err(InputError::NotInteger));
}

#[test]
fn test_parse_int_in_range() {
    let range = 1..=3;
    assert_eq!(parse_int("3", Some(&range)), Ok(3));
    assert_eq!(parse_int("0", Some(&range)), Err(InputError::NotMenuOption));
    assert_eq!(parse_int("5", Some(&range)), Err(InputError::NotMenuOption));
    assert_eq!(parse_int("y", Some(&range)), Err(InputError::NotInteger));
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("01/31/2019"), Ok(ymd(2019, 1, 31)));
    assert_eq!(parse_date(" 12/31/2019 "), Ok(ymd(2019, 12, 31)));
    assert_eq!(parse_date("02/30/2019"), Err(InputError::NotDate));
    assert_eq!(parse_date("2019-01-31"), Err(InputError::NotDate));
    assert_eq!(parse_date("01/31/19"), Err(InputError::NotDate));
    assert_eq!(parse_date("31/01/2019"), Err(InputError::NotDate));
    assert_eq!(parse_date(""), Err(InputError::NotDate));
}

#[test]
fn test_user_date_round_trip() {
    let d = ymd(2019, 1, 5);
    assert_eq!(format_user_date(d), "01/05/2019");
    assert_eq!(parse_user_date(&format_user_date(d)), Some(d));
}

#[test]
fn test_error_messages() {
    assert_eq!(InputError::NotInteger.to_string(), "Value is not an integer.");
    assert_eq!(
        InputError::NotMenuOption.to_string(),
        "Value is not a menu option."
    );
    assert_eq!(InputError::NotDate.to_string(), "Value is not a valid date.");
    assert_eq!(InputError::NotEditKey.to_string(), "Input not a valid key.");
}

#[test]
fn test_edit_keys() {
    assert_eq!(EntryField::from_key("employee"), Some(EntryField::Employee));
    assert_eq!(EntryField::from_key("TIME"), Some(EntryField::Time));
    assert_eq!(EntryField::from_key(" notes "), Some(EntryField::Notes));
    assert_eq!(EntryField::from_key("id"), None);
    assert_eq!(EntryField::from_key("minutes"), None);
    assert!(EntryField::Notes.is_optional());
    assert!(!EntryField::Task.is_optional());
}

#[test]
fn test_field_line_layout() {
    assert_eq!(capitalize("employee"), "Employee");
    assert_eq!(capitalize("ID"), "Id");
    assert_eq!(field_line("employee", "Marcus"), "Employee : Marcus");
    assert_eq!(field_line("id", "1"), "Id       : 1");
    assert_eq!(field_line("notes", ""), "Notes    : ");
}

#[test]
fn test_employee_single_match() {
    let employees = names(&["Marcus", "Menno"]);
    let matched = EmployeeMatch::find(&employees, "marcus");

    assert_eq!(matched, EmployeeMatch::Single("Marcus".into()));
    assert_eq!(
        matched.into_query(),
        Some(Query::EmployeeIn(vec!["Marcus".into()]))
    );
}

#[test]
fn test_employee_no_match_is_empty_set() {
    let employees = names(&["Marcus", "Menno"]);
    let matched = EmployeeMatch::find(&employees, "zoe");

    assert_eq!(matched, EmployeeMatch::None);
    assert_eq!(matched.into_query(), Some(Query::EmployeeIn(Vec::new())));
}

#[test]
fn test_employee_multiple_matches_need_a_pick() {
    let employees = names(&["Marcus", "Menno", "Zoe"]);
    let matched = EmployeeMatch::find(&employees, "M");

    assert_eq!(
        matched,
        EmployeeMatch::Multiple(vec!["Marcus".into(), "Menno".into()])
    );
    assert_eq!(matched.pick(2), Some(Query::Employee("Menno".into())));
    assert_eq!(matched.pick(0), None);
    assert_eq!(matched.pick(3), None);
    assert_eq!(matched.into_query(), None);
}

#[test]
fn test_search_modes_in_menu_order() {
    let labels: Vec<_> = SearchMode::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Find by employee",
            "Find by date",
            "Find by date range",
            "Find by time",
            "Find by term"
        ]
    );
}

#[test]
fn test_config_defaults_for_missing_keys() {
    let cfg = Config::parse("database: /tmp/custom.sqlite\n").unwrap();
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.separator_char, "-");
    assert!(cfg.clear_screen);

    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn test_config_yaml_round_trip() {
    let cfg = Config {
        database: "/tmp/x.sqlite".into(),
        separator_char: "=".into(),
        clear_screen: false,
    };
    let yaml = cfg.to_yaml().unwrap();
    assert_eq!(Config::parse(&yaml).unwrap(), cfg);
}

#[test]
fn test_config_rejects_bad_yaml() {
    assert!(Config::parse("clear_screen: [not, a, bool]").is_err());
}
