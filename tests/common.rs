#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn al() -> Command {
    cargo_bin_cmd!("agentledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agentledger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema for a test DB
pub fn init_db(db_path: &str) {
    al().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// one partner (id 1, rate 100%) with two commissions in December 2024.
pub fn init_db_with_commissions(db_path: &str) {
    init_db(db_path);

    al().args([
        "--db", db_path, "--test", "partner", "--add", "--name", "Acme Estates", "--rate", "100%",
    ])
    .assert()
    .success();

    al().args([
        "--db",
        db_path,
        "--test",
        "commission",
        "--add",
        "--partner",
        "1",
        "--booking",
        "101",
        "--total",
        "100",
        "--date",
        "2024-12-05",
    ])
    .assert()
    .success();

    al().args([
        "--db",
        db_path,
        "--test",
        "commission",
        "--add",
        "--partner",
        "1",
        "--booking",
        "102",
        "--total",
        "250.50",
        "--date",
        "2024-12-20",
    ])
    .assert()
    .success();
}
