use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn ledger_file(&self) -> PathBuf {
        self.dir.path().join("expenses.json")
    }

    fn expense(&self) -> Command {
        let mut cmd = Command::cargo_bin("expense").unwrap();
        cmd.env("EXPENSE_LEDGER_DIR", self.dir.path())
            .env_remove("EXPENSE_LEDGER_FILE")
            .env_remove("RUST_LOG")
            .arg("--file")
            .arg(self.ledger_file());
        cmd
    }

    fn ids(&self) -> Vec<String> {
        stored_ids(&self.ledger_file())
    }
}

fn stored_ids(path: &Path) -> Vec<String> {
    let contents = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn no_arguments_prints_hint() {
    let ws = Workspace::new();
    ws.expense()
        .assert()
        .success()
        .stdout(predicate::str::contains("expense --help"));
    assert!(!ws.ledger_file().exists());
}

#[test]
fn summary_of_empty_ledger() {
    let ws = Workspace::new();
    ws.expense()
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn add_update_delete_scenario() {
    let ws = Workspace::new();

    ws.expense()
        .args(["--add", "12.50", "Lunch", "FOOD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));
    ws.expense()
        .args(["--add", "18.75", "Office Supplies", "OTHER", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $31.25"));

    let ids = ws.ids();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    ws.expense()
        .args(["--update", ids[0].as_str(), "15.00", "Lunch w/ client", "FOOD", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $33.75"));

    ws.expense()
        .args(["--delete", ids[1].as_str(), "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"))
        .stdout(predicate::str::contains("Total: $15.00"));

    assert_eq!(ws.ids(), vec![ids[0].clone()]);
    let contents = fs::read_to_string(ws.ledger_file()).unwrap();
    assert!(contents.contains("Lunch w/ client"));
    assert!(!contents.contains("Office Supplies"));
}

#[test]
fn ids_stay_unique_across_runs() {
    let ws = Workspace::new();
    for i in 0..3 {
        ws.expense()
            .args(["--add", "1", format!("item {}", i).as_str()])
            .assert()
            .success();
    }

    let mut ids = ws.ids();
    assert_eq!(ids.len(), 3);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn deleting_missing_id_reports_and_keeps_file() {
    let ws = Workspace::new();
    ws.expense().args(["--add", "5", "Coffee", "food"]).assert().success();
    let before = fs::read_to_string(ws.ledger_file()).unwrap();

    ws.expense()
        .args(["--delete", "550e8400-e29b-41d4-a716-446655440000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Expense not found"));

    assert_eq!(fs::read_to_string(ws.ledger_file()).unwrap(), before);
}

#[test]
fn invalid_amount_is_reported_without_failing() {
    let ws = Workspace::new();
    ws.expense()
        .args(["--add", "12,50", "Lunch", "--summary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid amount format"))
        .stdout(predicate::str::contains("No expenses recorded."));
    assert!(!ws.ledger_file().exists());
}

#[test]
fn extra_decimals_are_rounded_to_cents() {
    let ws = Workspace::new();
    ws.expense()
        .args(["--add", "3.459", "Gas", "TRANSPORT", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $3.46"))
        .stderr(predicate::str::contains("Error").not());

    let contents = fs::read_to_string(ws.ledger_file()).unwrap();
    assert!(contents.contains("346"));
}

#[test]
fn unknown_category_defaults_to_other() {
    let ws = Workspace::new();
    ws.expense()
        .args(["--add", "3", "Gift", "presents"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Defaulting to OTHER"));

    let contents = fs::read_to_string(ws.ledger_file()).unwrap();
    assert!(contents.contains("\"OTHER\""));
}

#[test]
fn category_filter() {
    let ws = Workspace::new();
    ws.expense().args(["--add", "2", "Tea", "FOOD"]).assert().success();
    ws.expense().args(["--add", "9", "Taxi", "transport"]).assert().success();

    ws.expense()
        .args(["--category-filter", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea"))
        .stdout(predicate::str::contains("Taxi").not());

    ws.expense()
        .args(["-c", "fod"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Valid categories"));
}

#[test]
fn month_summary_ignores_year() {
    let ws = Workspace::new();
    ws.expense()
        .args(["--add", "4", "Flowers", "OTHER", "--date", "2023-05-04"])
        .assert()
        .success();
    ws.expense()
        .args(["--add", "6", "Cake", "FOOD", "--date", "2025-05-20"])
        .assert()
        .success();
    ws.expense()
        .args(["--add", "100", "Rent", "UTILITIES", "--date", "2025-06-01"])
        .assert()
        .success();

    ws.expense()
        .args(["--month-summary", "may"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses for MAY: $10.00"))
        .stdout(predicate::str::contains("Rent").not());

    ws.expense()
        .args(["-m", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded expenses for month: FEBRUARY"));
}

#[test]
fn budgets_apply_within_one_run() {
    let ws = Workspace::new();
    ws.expense()
        .args(["--add", "15", "Dinner", "FOOD", "--date", "2024-05-10"])
        .assert()
        .success();

    ws.expense()
        .args(["--set-budget", "5", "10", "--check-budget", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: You have exceeded your budget for MAY ($15.00 spent of $10.00)",
        ));

    // Budgets are not persisted
    ws.expense()
        .args(["--check-budget", "may"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for MAY"));
}

#[test]
fn negative_budget_is_rejected() {
    let ws = Workspace::new();
    ws.expense()
        .args(["--set-budget", "may", "-10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn corrupt_file_is_preserved() {
    let ws = Workspace::new();
    fs::write(ws.ledger_file(), "{ not json").unwrap();

    ws.expense()
        .args(["--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."))
        .stderr(predicate::str::contains("Warning"));

    let preserved = ws.dir.path().join("expenses.json.corrupt");
    assert_eq!(fs::read_to_string(preserved).unwrap(), "{ not json");
}

#[test]
fn export_csv_to_file() {
    let ws = Workspace::new();
    ws.expense().args(["--add", "2", "Tea", "FOOD"]).assert().success();
    let output = ws.dir.path().join("out.csv");

    ws.expense()
        .args(["--export", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = fs::read_to_string(output).unwrap();
    assert!(contents.starts_with("ID,Date,Category,Amount,Description"));
    assert!(contents.contains("Tea"));
}

#[test]
fn argument_errors_fail() {
    let ws = Workspace::new();
    ws.expense().args(["--add", "12.50"]).assert().failure();
    ws.expense().args(["--month-summary", "13"]).assert().failure();
    ws.expense().args(["--bogus"]).assert().failure();
}
