use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "purse";

fn purse(data_dir: &TempDir, user: &str, password: &str) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("PURSE_DATA_DIR", data_dir.path())
        .env("PURSE_USER", user)
        .env("PURSE_PASSWORD", password)
        .env_remove("PURSE_LOG");
    cmd
}

fn registered(users: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for (login, password) in users {
        purse(&dir, login, password)
            .args(["register", login])
            .assert()
            .success()
            .stdout(contains(format!("Registered user '{}'", login)));
    }
    dir
}

#[test]
fn register_twice_fails() {
    let dir = registered(&[("alice", "secret")]);

    purse(&dir, "alice", "secret")
        .args(["register", "alice"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn wrong_password_is_rejected() {
    let dir = registered(&[("alice", "secret")]);

    purse(&dir, "alice", "nope")
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("Authentication failed"));
}

#[test]
fn expense_past_income_prints_deficit() {
    let dir = registered(&[("alice", "secret")]);

    purse(&dir, "alice", "secret")
        .args(["income", "salary", "1000"])
        .assert()
        .success()
        .stdout(contains("Recorded income of $1000.00 in 'salary'"));

    purse(&dir, "alice", "secret")
        .args(["expense", "rent", "1200", "--note", "march"])
        .assert()
        .success()
        .stdout(contains("Expenses exceed income by $200.00"));

    purse(&dir, "alice", "secret")
        .arg("history")
        .assert()
        .success()
        .stdout(contains("salary").and(contains("march")).and(contains("-$200.00")));
}

#[test]
fn budget_overrun_is_reported() {
    let dir = registered(&[("alice", "secret")]);

    purse(&dir, "alice", "secret")
        .args(["income", "salary", "500"])
        .assert()
        .success();
    purse(&dir, "alice", "secret")
        .args(["expense", "food", "100"])
        .assert()
        .success();

    purse(&dir, "alice", "secret")
        .args(["budget", "set", "food", "80"])
        .assert()
        .success()
        .stdout(contains("Budget for 'food' exceeded by $20.00"));

    purse(&dir, "alice", "secret")
        .arg("alerts")
        .assert()
        .success()
        .stdout(contains("Budget for 'food' exceeded by $20.00"));

    purse(&dir, "alice", "secret")
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("food").and(contains("-$20.00")));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = registered(&[("alice", "secret")]);

    purse(&dir, "alice", "secret")
        .args(["income", "salary", "-5"])
        .assert()
        .failure()
        .stderr(contains("amount must be positive"));

    purse(&dir, "alice", "secret")
        .args(["expense", "food", "abc"])
        .assert()
        .failure();

    purse(&dir, "alice", "secret")
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No transactions found"));
}

#[test]
fn transfer_between_users() {
    let dir = registered(&[("alice", "a-pass"), ("bob", "b-pass")]);

    purse(&dir, "alice", "a-pass")
        .args(["income", "salary", "100"])
        .assert()
        .success();

    purse(&dir, "alice", "a-pass")
        .args(["transfer", "bob", "30", "--note", "lunch"])
        .assert()
        .success()
        .stdout(contains("Transferred $30.00 to bob"));

    purse(&dir, "bob", "b-pass")
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Transfer from alice").and(contains("$30.00")));

    purse(&dir, "alice", "a-pass")
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Transfer to bob").and(contains("$70.00")));
}

#[test]
fn transfer_to_unknown_user_fails() {
    let dir = registered(&[("alice", "secret")]);

    purse(&dir, "alice", "secret")
        .args(["transfer", "carol", "10"])
        .assert()
        .failure()
        .stderr(contains("User not found: carol"));
}

#[test]
fn activity_shows_only_own_entries() {
    let dir = registered(&[("alice", "a-pass"), ("bob", "b-pass")]);

    purse(&dir, "bob", "b-pass")
        .args(["expense", "games", "15"])
        .assert()
        .success();

    purse(&dir, "alice", "a-pass")
        .arg("activity")
        .assert()
        .success()
        .stdout(contains("by alice").and(contains("games").not()));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().expect("temp dir");

    purse(&dir, "alice", "secret")
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: $"));
}
