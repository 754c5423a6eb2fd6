mod common;
use common::{rat, temp_path, write_fixture};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_init_and_force() {
    let conf = temp_path("config_init", "conf");

    rat()
        .args(["--config", &conf, "config", "--init"])
        .assert()
        .success();

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("punch_file: punches.csv"));
    assert!(content.contains("output_format: xlsx"));

    rat()
        .args(["--config", &conf, "config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    rat()
        .args(["--config", &conf, "config", "--init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_check_reports_missing_fields() {
    let conf = write_fixture("config_check", "conf", "output_format: csv\n");

    rat()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("punch_file"))
        .stdout(predicate::str::contains("header_language"))
        .stdout(predicate::str::contains("output_format").not());
}

#[test]
fn test_config_print_shows_effective_values() {
    let conf = write_fixture("config_print", "conf", "header_language: zh\n");

    rat()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header_language: zh"))
        .stdout(predicate::str::contains("schedule_file: schedule.csv"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let conf = write_fixture("config_bad", "conf", "output_format: pdf\n");

    rat()
        .args(["--config", &conf, "report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}
