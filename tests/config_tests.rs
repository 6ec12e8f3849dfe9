mod common;
use common::setup_test_dir;
use emogo::config::Config;
use emogo::errors::AppError;
use emogo::storage::StorageKind;
use std::fs;
use std::path::Path;

#[test]
fn test_defaults_when_file_is_missing() {
    let dir = setup_test_dir("config_defaults");
    let cfg = Config::load(&dir).expect("load");

    assert_eq!(cfg.utc_offset_hours, 8);
    assert_eq!(cfg.storage, StorageKind::Filesystem);
    assert_eq!(cfg.data_path(), dir.join("emogo_log.json"));
    assert_eq!(cfg.vlog_path(), dir.join("vlogs"));
    assert_eq!(cfg.export_path(), dir.join("cache"));
}

#[test]
fn test_export_area_follows_the_app_dir() {
    let default_dir = Config::with_app_dir(Config::default_app_dir());
    if let Some(cache) = dirs::cache_dir() {
        assert_eq!(default_dir.export_path(), cache.join("emogo"));
    }

    let dir = setup_test_dir("config_export_area");
    let mut cfg = Config::with_app_dir(&dir);
    assert_eq!(cfg.export_path(), dir.join("cache"));

    cfg.export_dir = Some("out".to_string());
    assert_eq!(cfg.export_path(), dir.join("out"));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = setup_test_dir("config_round_trip");
    let mut cfg = Config::with_app_dir(&dir);
    cfg.export_dir = Some("/var/tmp/emogo-export".to_string());
    cfg.storage = StorageKind::Memory;

    let path = cfg.save().expect("save");
    assert_eq!(path, dir.join("emogo.conf"));

    let loaded = Config::load(&dir).expect("load");
    assert_eq!(loaded.export_path(), Path::new("/var/tmp/emogo-export"));
    assert_eq!(loaded.storage, StorageKind::Memory);
    assert_eq!(loaded.collection_times, cfg.collection_times);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = setup_test_dir("config_partial");
    fs::write(dir.join("emogo.conf"), "utc_offset_hours: 9\n").expect("write");

    let cfg = Config::load(&dir).expect("load");
    assert_eq!(cfg.utc_offset_hours, 9);
    assert_eq!(cfg.data_file, "emogo_log.json");
    assert_eq!(cfg.collection_times.len(), 3);
}

#[test]
fn test_invalid_files_are_rejected() {
    let dir = setup_test_dir("config_invalid");

    fs::write(dir.join("emogo.conf"), "utc_offset_hours: 20\n").expect("write");
    assert!(matches!(Config::load(&dir), Err(AppError::Config(_))));

    fs::write(dir.join("emogo.conf"), "collection_times: nope\n").expect("write");
    assert!(matches!(Config::load(&dir), Err(AppError::Config(_))));

    fs::write(
        dir.join("emogo.conf"),
        "collection_times:\n  - hour: 7\n    minute: 75\n",
    )
    .expect("write");
    assert!(matches!(
        Config::load(&dir),
        Err(AppError::InvalidSchedule(_))
    ));
}
