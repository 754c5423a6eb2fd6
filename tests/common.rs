#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PUNCHES: &str = "device_id,employee_id,name,department,date,times
1,1001,Alice,Lab,2024-05-06,08:30:00  13:00:00  18:15:00
1,1001,Alice,Lab,2024-05-07,09:30:00
2,1002,Bob,Lab,2024-05-06,06:00:00  23:59:59
1,1001,Alice,Lab,2024-05-11,06:00:00
";

pub const SCHEDULE: &str = "date
2024-05-06
2024-05-07

2024-05-08
2024-05-07
";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Unique path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

/// Config path that does not exist, so the run uses built-in defaults
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}

/// Run `report` on the standard fixtures and return the output path
pub fn run_report(name: &str, format: &str) -> String {
    let punches = write_fixture(&format!("{name}_punches"), "csv", PUNCHES);
    let schedule = write_fixture(&format!("{name}_schedule"), "csv", SCHEDULE);
    let out = temp_path(&format!("{name}_out"), format);

    rat()
        .args([
            "--config",
            &no_config(name),
            "report",
            "--punches",
            &punches,
            "--schedule",
            &schedule,
            "--output",
            &out,
            "--format",
            format,
        ])
        .assert()
        .success();

    out
}
