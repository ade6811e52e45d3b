#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use shotlog::models::BackupFile;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub fn sl() -> Command {
    cargo_bin_cmd!("shotlog")
}

/// Fixed reference time, `min` minutes later.
pub fn at(min: i64) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 6, 2, 9, 0, 0)
        .single()
        .expect("unambiguous base time")
        + TimeDelta::minutes(min)
}

pub fn backup(path: &str, min: i64) -> BackupFile {
    BackupFile::new(path, at(min))
}

/// Create an empty, unique directory inside the system temp dir
pub fn temp_tree(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shotlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp tree");
    path
}

/// Config path in the temp dir that does not exist yet
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shotlog.conf", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Temporary output file path, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create `rel` under `dir` with its modification time set to `at(min)`.
pub fn touch(dir: &Path, rel: &str, min: i64) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    let file = File::create(&path).expect("create file");
    file.set_modified(SystemTime::from(at(min)))
        .expect("set mtime");
    path
}

/// Small project: shotA with two sessions, shotB with a single backup,
/// plus files that must be ignored.
pub fn sample_project(name: &str) -> PathBuf {
    let dir = temp_tree(name);
    touch(&dir, "shotA/shotA_bak1.hip", 0);
    touch(&dir, "shotA/shotA_bak2.hip", 10);
    touch(&dir, "shotA/shotA_bak3.hip", 50);
    touch(&dir, "shotA/shotA_bak4.hip", 60);
    touch(&dir, "shotB/backup/shotB_1_bak1.hipnc", 120);
    touch(&dir, "notes.txt", 5);
    touch(&dir, "shotC_final.hip", 5);
    dir
}
