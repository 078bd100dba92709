//! CLI integration tests against the `ut` binary.
//! Each test pins the clock with `--at` so output is reproducible.

use assert_cmd::Command;
use predicates::prelude::*;

// 2026-02-21T00:00:00Z
const FIXED_AT: &str = "1771632000";

fn ut_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ut").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_runs_with_fixed_clock() {
    ut_cmd()
        .args(["--at", FIXED_AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("UNIVERSAL TIME CALCULATOR v2.0"))
        .stdout(predicate::str::contains("System Time (UTC): Sat Feb 21 00:00:00 2026"))
        .stdout(predicate::str::contains("5824.00 years"))
        .stdout(predicate::str::contains("Current Gregorian year: 2026"))
        .stdout(predicate::str::contains("Analysis Complete"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn report_runs_with_system_clock() {
    ut_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("System Time (UTC):"))
        .stdout(predicate::str::contains("[+] FUTURE PROJECTIONS"));
}

#[test]
fn output_is_deterministic_for_fixed_clock() {
    let a = ut_cmd().args(["--at", FIXED_AT]).output().unwrap();
    let b = ut_cmd().args(["--at", FIXED_AT]).output().unwrap();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn unknown_arguments_are_ignored() {
    let expected = ut_cmd().args(["--at", FIXED_AT]).output().unwrap();
    let output = ut_cmd()
        .args(["--bogus", "extra", "positional"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("5824.00 years"));
    assert!(stdout.contains("Analysis Complete"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring command-line arguments"));
    // Same report layout as a clean run, apart from the clock line
    assert_eq!(
        stdout.lines().count(),
        String::from_utf8_lossy(&expected.stdout).lines().count()
    );
}

#[test]
fn anchor_year_override() {
    ut_cmd()
        .args(["--at", FIXED_AT, "--anchor-year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5826.00 years"))
        .stdout(predicate::str::contains("Years elapsed: 4050"));
}

#[test]
fn references_flag_adds_section() {
    ut_cmd()
        .args(["--at", FIXED_AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXTUAL REFERENCES").not());

    ut_cmd()
        .args(["--at", FIXED_AT, "--references"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] TEXTUAL REFERENCES"))
        .stdout(predicate::str::contains("Quran 22:47"));
}

#[test]
fn verbose_logs_to_stderr() {
    ut_cmd()
        .args(["--at", FIXED_AT, "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis Complete"))
        .stderr(predicate::str::contains("generating report"))
        .stderr(predicate::str::contains("2026-02-21T00:00:00Z"));
}

#[test]
fn help_exits_cleanly() {
    ut_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--anchor-year"));
}
