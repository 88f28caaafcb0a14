//! Drives the binary in script mode: one stdin line per prompt.

use assert_cmd::Command;
use assert_fs::TempDir;
use crop_ledger::{cli::SCRIPT_MODE_ENV, config::DATA_FILE_ENV};
use predicates::prelude::*;

fn script_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("crop_ledger_cli").expect("binary builds");
    cmd.env(SCRIPT_MODE_ENV, "1")
        .env(DATA_FILE_ENV, temp.path().join("crop.txt"))
        .env("XDG_DATA_HOME", temp.path().join("data"));
    cmd
}

#[test]
fn add_update_display_and_summarize() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("1\n1\nCorn\n100\n8\nSpring\n150\n2\n4\nSpring\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crop entry saved"))
        .stdout(predicate::str::contains("Updated 1 entries."))
        .stdout(predicate::str::contains("Corn"))
        .stdout(predicate::str::contains(
            "Spring (1 entries): expenses 100.00, income 150.00, profit 50.00 (Profit)",
        ))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn invalid_menu_and_amount_input_reprompts() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("abc\n9\n1\n5\n2\nCorn,2\nCorn\n-10\n25\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a number between 0 and 8.",
        ))
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 4.",
        ))
        .stdout(predicate::str::contains("letters only"))
        .stdout(predicate::str::contains("non-negative number"))
        .stdout(predicate::str::contains("Crop entry saved"));
}

#[test]
fn entries_persist_between_runs_and_deletes_stick() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("1\n1\nCorn\n100\n1\n4\nKale\n50\n0\n")
        .assert()
        .success();

    script_cmd(&temp)
        .write_stdin("6\n1\nSpring\n3\nSpring\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 entries."))
        .stdout(predicate::str::contains("Removed 1 entries."))
        .stdout(predicate::str::contains(
            "No entries found for season 'Spring'.",
        ));
}

#[test]
fn end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    script_cmd(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crops Financial Tracker"));
}
