use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{setup_test_db, wl};

#[test]
fn test_menu_quits_cleanly() {
    let db_path = setup_test_db("cli_quit");

    wl("cli_quit")
        .args(["--db", &db_path])
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(contains("Main Menu"))
        .stdout(contains("3) Quit program"))
        .stdout(contains("Created entries table").not());

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_menu_survives_invalid_utf8_input() {
    let db_path = setup_test_db("cli_bad_bytes");

    wl("cli_bad_bytes")
        .args(["--db", &db_path])
        .write_stdin(b"\xff\xfe\n\n3\n".to_vec())
        .assert()
        .success()
        .stdout(contains("Value is not an integer."))
        .stderr(contains("Error").not());
}

#[test]
fn test_menu_ends_on_closed_input() {
    let db_path = setup_test_db("cli_eof");

    wl("cli_eof")
        .args(["--db", &db_path])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn test_add_then_find_by_term() {
    let db_path = setup_test_db("cli_add_term");

    wl("cli_add_term")
        .args(["--db", &db_path])
        .write_stdin("1\nMarcus\nProgramming\n100\nProject #4\n3\n")
        .assert()
        .success();

    // The entry survives the process and is found in a new session.
    wl("cli_add_term")
        .args(["--db", &db_path])
        .write_stdin("2\n5\nProgramming\nr\n3\n")
        .assert()
        .success()
        .stdout(contains("Result 1 of 1"))
        .stdout(contains("Employee : Marcus"))
        .stdout(contains("Notes    : Project #4"));
}

#[test]
fn test_time_search_returns_only_matching_entry() {
    let db_path = setup_test_db("cli_time");

    wl("cli_time")
        .args(["--db", &db_path])
        .write_stdin(
            "1\nMarcus\nProgramming\n100\nProject #4\n\
             1\nMenno\nDesigning\n50\nVVD\n\
             2\n4\n50\nn\nr\n3\n",
        )
        .assert()
        .success()
        .stdout(contains("Result 1 of 1"))
        .stdout(contains("Employee : Menno"))
        .stdout(contains("Employee : Marcus").not());
}

#[test]
fn test_view_on_empty_database() {
    let db_path = setup_test_db("cli_empty_view");

    wl("cli_empty_view")
        .args(["--db", &db_path])
        .write_stdin("2\n\n3\n")
        .assert()
        .success()
        .stdout(contains("No previous entries. Please add an entry first."));
}

#[test]
fn test_init_in_test_mode() {
    let db_path = setup_test_db("cli_init");

    wl("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");

    wl("cli_log")
        .args(["--db", &db_path])
        .write_stdin("1\nMarcus\nProgramming\n100\n\n3\n")
        .assert()
        .success();

    wl("cli_log")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Marcus / Programming (100 min)"));
}

#[test]
fn test_config_print() {
    wl("cli_config")
        .args(["--db", "/tmp/cli_config_worklog.sqlite", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database: /tmp/cli_config_worklog.sqlite"))
        .stdout(contains("separator_char"))
        .stdout(contains("clear_screen: true"));
}
