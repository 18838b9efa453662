mod common;

use common::{al, init_db, init_db_with_commissions, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

// ---------------------------------------------------------------
// init / db / log
// ---------------------------------------------------------------

#[test]
fn init_creates_the_database_file() {
    let db = setup_test_db("init_creates");

    al().args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(Path::new(&db).exists());
}

#[test]
fn init_writes_an_internal_log_entry() {
    let db = setup_test_db("init_logs");
    init_db(&db);

    al().args(["--db", &db, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"));
}

#[test]
fn db_info_reports_all_tables() {
    let db = setup_test_db("db_info");
    init_db(&db);

    al().args(["--db", &db, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Partners"))
        .stdout(predicate::str::contains("Payout summaries"));
}

// ---------------------------------------------------------------
// clock / day
// ---------------------------------------------------------------

#[test]
fn clock_in_and_out_marks_the_day_present() {
    let db = setup_test_db("clock_in_out");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "clock", "7", "--date", "2024-12-02", "--in", "09:00", "--out",
        "12:00",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Recorded login at 09:00"))
    .stdout(predicate::str::contains("03:00 worked over 1 session(s)"));

    al().args(["--db", &db, "--test", "day", "7", "--period", "2024-12-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Present"))
        .stdout(predicate::str::contains("First login: 09:00"))
        .stdout(predicate::str::contains("Last logout: 12:00"));
}

#[test]
fn clock_without_in_or_out_fails() {
    let db = setup_test_db("clock_nothing");
    init_db(&db);

    al().args(["--db", &db, "--test", "clock", "7", "--date", "2024-12-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("specify at least --in or --out"));
}

#[test]
fn double_login_keeps_the_latest_one() {
    let db = setup_test_db("double_login");
    init_db(&db);

    for (flag, time) in [("--in", "09:00"), ("--in", "09:05"), ("--out", "09:30")] {
        al().args(["--db", &db, "--test", "clock", "7", "--date", "2024-12-02", flag, time])
            .assert()
            .success();
    }

    al().args([
        "--db", &db, "--test", "day", "7", "--period", "2024-12-02", "--details",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("00:25 worked over 1 session(s)"))
    .stdout(predicate::str::contains("09:05 → 09:30 (25 min)"));
}

#[test]
fn orphan_logout_day_stays_absent() {
    let db = setup_test_db("orphan_logout");
    init_db(&db);

    al().args(["--db", &db, "--test", "clock", "7", "--date", "2024-12-02", "--out", "10:00"])
        .assert()
        .success();

    al().args(["--db", &db, "--test", "day", "7", "--period", "2024-12-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Absent"))
        .stdout(predicate::str::contains("00:00 worked over 0 session(s)"));
}

#[test]
fn trailing_login_shows_an_active_session() {
    let db = setup_test_db("active_session");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "clock", "7", "--date", "2024-12-02", "--in", "09:00", "--out",
        "12:00",
    ])
    .assert()
    .success();

    al().args(["--db", &db, "--test", "clock", "7", "--date", "2024-12-02", "--in", "13:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(active session)"));

    al().args(["--db", &db, "--test", "day", "7", "--period", "2024-12-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Present"))
        .stdout(predicate::str::contains("03:00 worked over 2 session(s) (active session)"))
        .stdout(predicate::str::contains("Last logout: 12:00"));
}

#[test]
fn day_skips_dates_without_events() {
    let db = setup_test_db("day_skips_empty");
    init_db(&db);

    al().args(["--db", &db, "--test", "day", "7", "--period", "2024-12-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subject 7").not());
}

// ---------------------------------------------------------------
// partner / commission
// ---------------------------------------------------------------

#[test]
fn partner_add_and_list() {
    let db = setup_test_db("partner_add_list");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "partner", "--add", "--name", "Acme Estates", "--rate", "2.5%",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Added partner Acme Estates (id 1)"));

    al().args(["--db", &db, "--test", "partner", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Estates"))
        .stdout(predicate::str::contains("rate '2.5%' (parsed 2.5%)"));
}

#[test]
fn commission_add_refreshes_the_payout_summary() {
    let db = setup_test_db("commission_add");
    init_db_with_commissions(&db);

    al().args(["--db", &db, "--test", "payout", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("partner 1 | December 2024"))
        .stdout(predicate::str::contains("2 record(s)"))
        .stdout(predicate::str::contains("total 350.5"))
        .stdout(predicate::str::contains("pending"));
}

#[test]
fn commission_list_shows_the_records() {
    let db = setup_test_db("commission_list");
    init_db_with_commissions(&db);

    al().args(["--db", &db, "--test", "commission", "--list", "--partner", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("booking 101"))
        .stdout(predicate::str::contains("booking 102"))
        .stdout(predicate::str::contains("December 2024"));
}

#[test]
fn commission_for_unknown_partner_is_skipped() {
    let db = setup_test_db("commission_unknown_partner");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "commission", "--add", "--partner", "99", "--booking", "5",
        "--total", "1000", "--date", "2024-12-05",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Commission skipped"));
}

#[test]
fn rate_change_then_recompute_updates_totals() {
    let db = setup_test_db("recompute_totals");
    init_db_with_commissions(&db);

    al().args(["--db", &db, "--test", "partner", "--id", "1", "--rate", "50%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated rate of partner 1"));

    al().args(["--db", &db, "--test", "commission", "--recompute", "--partner", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Regenerated 2 commission record(s)"));

    al().args(["--db", &db, "--test", "payout", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total 175.25"));
}

// ---------------------------------------------------------------
// payout
// ---------------------------------------------------------------

#[test]
fn payout_refresh_accepts_the_abbreviated_month() {
    let db = setup_test_db("payout_refresh_abbrev");
    init_db_with_commissions(&db);

    al().args([
        "--db", &db, "--test", "payout", "--refresh", "--partner", "1", "--month", "Dec",
        "--year", "2024",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Refreshed payout for partner 1 December 2024"))
    .stdout(predicate::str::contains("2 record(s)"));
}

#[test]
fn payout_status_advances_forward() {
    let db = setup_test_db("payout_forward");
    init_db_with_commissions(&db);

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "approved", "--partner", "1",
        "--month", "December", "--year", "2024",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("is now approved"));

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "paid", "--partner", "1", "--month",
        "Dec", "--year", "2024",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("is now paid"));
}

#[test]
fn payout_backward_transition_requires_force() {
    let db = setup_test_db("payout_backward");
    init_db_with_commissions(&db);

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "paid", "--partner", "1", "--month",
        "December", "--year", "2024",
    ])
    .assert()
    .success();

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "pending", "--partner", "1",
        "--month", "December", "--year", "2024",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Status transition not allowed"));

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "pending", "--partner", "1",
        "--month", "December", "--year", "2024", "--force",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("is now pending"));

    // The override leaves a trace in the internal log.
    al().args(["--db", &db, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("payout_status_override"));
}

#[test]
fn payout_reset_returns_the_month_to_pending() {
    let db = setup_test_db("payout_reset");
    init_db_with_commissions(&db);

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "paid", "--partner", "1", "--month",
        "December", "--year", "2024",
    ])
    .assert()
    .success();

    al().args([
        "--db", &db, "--test", "payout", "--reset", "--month", "Dec", "--year", "2024",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Reset 1 payout summary(ies) for December 2024 to pending",
    ));

    al().args(["--db", &db, "--test", "payout", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));
}

#[test]
fn payout_set_status_on_missing_summary_fails() {
    let db = setup_test_db("payout_missing_summary");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "payout", "--set-status", "approved", "--partner", "1",
        "--month", "December", "--year", "2024",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No payout summary"));
}

// ---------------------------------------------------------------
// export / backup
// ---------------------------------------------------------------

#[test]
fn export_payouts_to_csv() {
    let db = setup_test_db("export_payouts_csv");
    init_db_with_commissions(&db);

    let out = temp_out("export_payouts_csv", "csv");

    al().args([
        "--db", &db, "--test", "export", "--format", "csv", "--file", &out, "--payouts",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("partner_id"));
    assert!(content.contains("December"));
    assert!(content.contains("pending"));
}

#[test]
fn export_events_to_json() {
    let db = setup_test_db("export_events_json");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "clock", "7", "--date", "2024-12-02", "--in", "09:00", "--out",
        "12:00",
    ])
    .assert()
    .success();

    let out = temp_out("export_events_json", "json");

    al().args([
        "--db", &db, "--test", "export", "--format", "json", "--file", &out, "--range", "all",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"kind\""));
    assert!(content.contains("login"));
    assert!(content.contains("logout"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db = setup_test_db("export_no_overwrite");
    init_db_with_commissions(&db);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "existing").unwrap();

    al().args([
        "--db", &db, "--test", "export", "--format", "csv", "--file", &out, "--payouts",
    ])
    .assert()
    .failure();

    al().args([
        "--db", &db, "--test", "export", "--format", "csv", "--file", &out, "--payouts", "-f",
    ])
    .assert()
    .success();

    assert!(fs::read_to_string(&out).unwrap().contains("partner_id"));
}

#[test]
fn export_rejects_a_relative_path() {
    let db = setup_test_db("export_relative");
    init_db(&db);

    al().args([
        "--db", &db, "--test", "export", "--format", "csv", "--file", "out.csv",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn backup_creates_a_copy_of_the_database() {
    let db = setup_test_db("backup_copy");
    init_db(&db);

    let out = temp_out("backup_copy", "sqlite");

    al().args(["--db", &db, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    assert!(Path::new(&out).exists());
}
