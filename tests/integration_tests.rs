use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{sample_project, sl, temp_config, temp_out, temp_tree, touch};

#[test]
fn test_scan_reports_sessions_per_shot() {
    let dir = sample_project("cli_scan");
    let cfg = temp_config("cli_scan");

    sl()
        .args(["--config", &cfg, "scan", "--timestamp", "modified"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("shotA sessions:"))
        .stdout(contains("shotB sessions:"))
        .stdout(contains("shotA_bak2.hip"))
        .stdout(contains("shotA_bak4.hip"))
        .stdout(contains("2025-06-02 09:50:00"))
        .stdout(contains("duration of everything: 0:20:00"))
        .stdout(contains("notes.txt").not())
        .stdout(contains("shotC").not());
}

#[test]
fn test_scan_gap_override() {
    let dir = sample_project("cli_scan_gap");
    let cfg = temp_config("cli_scan_gap");

    // 40 minutes between bak2 and bak3 no longer splits the session
    sl()
        .args(["--config", &cfg, "scan", "--timestamp", "modified", "--gap", "45"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("duration of everything: 1:00:00"));
}

#[test]
fn test_scan_depth_from_config_file() {
    let dir = temp_tree("cli_scan_depth");
    touch(&dir, "shot3_1_bak1.hip", 0);
    touch(&dir, "shot3_1_bak2.hip", 5);
    touch(&dir, "shot3_2_bak1.hip", 10);
    let cfg = temp_config("cli_scan_depth");
    fs::write(&cfg, "underscore_depth: 2\ntimestamp: modified\n").expect("write config");

    sl()
        .args(["--config", &cfg, "scan"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("shot3_1 sessions:"))
        .stdout(contains("shot3_2 sessions:"))
        .stdout(contains("duration of everything: 0:05:00"));
}

#[test]
fn test_scan_summary() {
    let dir = sample_project("cli_scan_summary");
    let cfg = temp_config("cli_scan_summary");

    sl()
        .args(["--config", &cfg, "scan", "--summary", "--timestamp", "modified"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("shotA"))
        .stdout(contains("sessions:"))
        .stdout(contains("shotA_bak2.hip").not())
        .stdout(contains("duration of everything: 0:20:00"));
}

#[test]
fn test_scan_empty_directory_is_not_an_error() {
    let dir = temp_tree("cli_scan_empty");
    let cfg = temp_config("cli_scan_empty");

    sl()
        .args(["--config", &cfg, "scan"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("duration of everything: 0:00:00"))
        .stderr(contains("No backup files found"));
}

#[test]
fn test_scan_cancelled_prompt_fails() {
    let cfg = temp_config("cli_scan_cancel");

    sl()
        .args(["--config", &cfg, "scan"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(contains("No directory selected"));
}

#[test]
fn test_scan_prompted_directory() {
    let dir = sample_project("cli_scan_prompt");
    let cfg = temp_config("cli_scan_prompt");

    sl()
        .args(["--config", &cfg, "scan", "--timestamp", "modified"])
        .write_stdin(format!("{}\n", dir.display()))
        .assert()
        .success()
        .stdout(contains("duration of everything: 0:20:00"));
}

#[test]
fn test_scan_rejects_file_as_root() {
    let dir = temp_tree("cli_scan_file_root");
    let file = touch(&dir, "x_bak1.hip", 0);
    let cfg = temp_config("cli_scan_file_root");

    sl()
        .args(["--config", &cfg, "scan"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("Not a directory"));
}

#[test]
fn test_scan_rejects_zero_depth() {
    let dir = temp_tree("cli_scan_zero_depth");
    let cfg = temp_config("cli_scan_zero_depth");

    sl()
        .args(["--config", &cfg, "scan", "--depth", "0"])
        .arg(&dir)
        .assert()
        .failure()
        .stderr(contains("underscore_depth"));
}

#[test]
fn test_export_csv() {
    let dir = sample_project("cli_export_csv");
    let cfg = temp_config("cli_export_csv");
    let out = temp_out("cli_export_csv", "csv");

    sl()
        .args([
            "--config", &cfg, "export", "--timestamp", "modified", "--format", "csv", "--file",
            &out,
        ])
        .arg(&dir)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("shot,last_file,start,end,duration_seconds")
    );
    assert!(content.contains("shotA,shotA_bak2.hip,2025-06-02 09:00:00,2025-06-02 09:10:00,600"));
    assert!(content.contains("shotB,shotB_1_bak1.hipnc"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_json() {
    let dir = sample_project("cli_export_json");
    let cfg = temp_config("cli_export_json");
    let out = temp_out("cli_export_json", "json");

    sl()
        .args([
            "--config", &cfg, "export", "--timestamp", "modified", "--format", "json", "--file",
            &out,
        ])
        .arg(&dir)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(json["total_seconds"], 1200);
    assert_eq!(json["total"], "0:20:00");
    assert_eq!(json["shots"][0]["shot"], "shotA");
    assert_eq!(json["shots"][0]["sessions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_export_requires_absolute_path() {
    let dir = sample_project("cli_export_relative");
    let cfg = temp_config("cli_export_relative");

    sl()
        .args(["--config", &cfg, "export", "--file", "relative.csv"])
        .arg(&dir)
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let dir = sample_project("cli_export_overwrite");
    let cfg = temp_config("cli_export_overwrite");
    let out = temp_out("cli_export_overwrite", "csv");
    fs::write(&out, "keep me").expect("write existing");

    sl()
        .args(["--config", &cfg, "export", "--file", &out])
        .arg(&dir)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    sl()
        .args(["--config", &cfg, "export", "--force", "--file", &out])
        .arg(&dir)
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_config_init_print_check() {
    let cfg = temp_config("cli_config");

    sl()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success();

    sl()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("underscore_depth: 1"))
        .stdout(contains("session_gap_minutes: 30"));

    sl()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("Configuration is complete."));
}

#[test]
fn test_config_migrate_adds_missing_fields() {
    let cfg = temp_config("cli_config_migrate");
    fs::write(&cfg, "column_width: 30\n").expect("write config");

    sl()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("Missing fields").and(contains("underscore_depth")));

    sl()
        .args(["--config", &cfg, "config", "--migrate"])
        .assert()
        .success()
        .stderr(contains("Added missing fields"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("column_width: 30"));
    assert!(content.contains("trailing_break: drop"));
}
