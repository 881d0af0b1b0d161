//! End-to-end tests for the `plan-estimator` binary.
//!
//! Plan output goes to stdout; logs and error reports go to stderr.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn plan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("plan-estimator").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_run_prints_plan_and_cost() {
    plan_cmd()
        .assert()
        .success()
        .stdout(contains("Building name   : Residential Apartment Building"))
        .stdout(contains("Built-up area   : 1500.0 sq.ft."))
        .stdout(contains("Estimated raw-material cost : 1800000.0"))
        .stdout(contains("(Using rate 1200.0 per sq.ft.)"));
}

#[test]
fn zero_area_prints_plan_then_fails() {
    plan_cmd()
        .args(["--area", "0"])
        .assert()
        .code(1)
        .stdout(contains("=== ARCHITECTURAL PLAN ==="))
        .stdout(contains("COST ESTIMATION").not())
        .stderr(contains("must both be positive"));
}

#[test]
fn infinite_area_in_json_mode_fails_without_null_output() {
    plan_cmd()
        .args(["--area", "inf", "--format", "json"])
        .assert()
        .code(3)
        .stdout(contains("null").not())
        .stderr(contains("non-finite 'area'"));
}

#[test]
fn cost_block_names_its_building() {
    plan_cmd()
        .args(["--name", "Depot"])
        .assert()
        .success()
        .stdout(contains("Building name               : Depot"));
}

#[test]
fn plan_only_skips_cost() {
    plan_cmd()
        .args(["--plan-only", "--area", "-5"])
        .assert()
        .success()
        .stdout(contains("Built-up area   : -5.0 sq.ft."))
        .stdout(contains("COST ESTIMATION").not());
}

#[test]
fn rate_and_format_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[planning]\ndefault_rate = 2.5\n\n[output]\nformat = \"json\"\n")
        .unwrap();

    plan_cmd()
        .args(["--area", "100", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("\"kind\":\"plan\""))
        .stdout(contains("\"total\":250.0"));
}

#[test]
fn rate_flag_overrides_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[planning]\ndefault_rate = 2.5\n").unwrap();

    plan_cmd()
        .args(["--area", "100", "--rate", "3", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("Estimated raw-material cost : 300.0"));
}

#[test]
fn invalid_configured_rate_exits_before_planning() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[planning]\ndefault_rate = -1.0\n").unwrap();

    plan_cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .code(2)
        .stdout(contains("ARCHITECTURAL PLAN").not())
        .stderr(contains("planning.default_rate"));
}

#[test]
fn missing_config_file_is_reported() {
    plan_cmd()
        .args(["--config", "/nonexistent/planner.toml"])
        .assert()
        .code(2)
        .stderr(contains("cannot read"));
}
