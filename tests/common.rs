#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use emogo::config::Config;
use emogo::core::AppContext;
use emogo::core::clock::{Clock, FixedClock, SystemClock};
use emogo::models::{Record, RecordKind};
use emogo::storage::{FsBackend, StorageBackend};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn emo() -> Command {
    let mut cmd = cargo_bin_cmd!("emogo");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh, empty app directory inside the system temp dir.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("emogo_test_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid instant")
}

/// Context on the real filesystem rooted at `dir`, with a fixed clock.
pub fn fs_context(dir: &Path, now: DateTime<Utc>) -> AppContext {
    context_with(dir, Arc::new(FsBackend), Arc::new(FixedClock(now)))
}

pub fn system_context(dir: &Path) -> AppContext {
    context_with(dir, Arc::new(FsBackend), Arc::new(SystemClock))
}

pub fn context_with(
    dir: &Path,
    backend: Arc<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
) -> AppContext {
    AppContext::with_parts(Config::with_app_dir(dir), backend, clock).expect("context")
}

pub fn sentiment(id: i64, value: &str, coords: Option<(f64, f64)>) -> Record {
    Record {
        id,
        timestamp: "2024-01-01T07:30:00".to_string(),
        kind: RecordKind::Sentiment,
        value: value.to_string(),
        vlog_path: None,
        lat: coords.map(|c| c.0),
        lng: coords.map(|c| c.1),
    }
}

pub fn vlog(id: i64, path: &str) -> Record {
    Record {
        id,
        timestamp: "2024-01-01T13:30:05".to_string(),
        kind: RecordKind::Vlog,
        value: "recorded".to_string(),
        vlog_path: Some(path.to_string()),
        lat: None,
        lng: None,
    }
}
