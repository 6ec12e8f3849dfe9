mod common;
use chrono::FixedOffset;
use common::{context_with, fs_context, setup_test_dir, system_context, utc};
use emogo::core::builder::RecordBuilder;
use emogo::core::clock::{FixedClock, local_timestamp};
use emogo::errors::AppError;
use emogo::models::{Coordinates, RecordKind};
use emogo::platform::ManualCoordinates;
use emogo::storage::{FsBackend, MemoryBackend, StorageBackend};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

fn utc8() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("offset")
}

#[test]
fn test_timestamp_is_anchored_at_utc_plus_8() {
    // 23:30 UTC on new year's eve is already 07:30 on Jan 1st in UTC+8
    let ts = local_timestamp(utc(2023, 12, 31, 23, 30, 0), utc8());
    assert_eq!(ts, "2024-01-01T07:30:00");

    let ts = local_timestamp(utc(2024, 3, 5, 1, 2, 3), utc8());
    assert_eq!(ts, "2024-03-05T09:02:03");
}

#[test]
fn test_build_mirrors_inputs() {
    let now = utc(2024, 1, 1, 0, 0, 0);
    let builder = RecordBuilder::new(Arc::new(FixedClock(now)), utc8());

    let r = builder.build(
        RecordKind::Sentiment,
        "4",
        None,
        Some(Coordinates::new(25.03, 121.56)),
    );
    assert_eq!(r.id, now.timestamp_millis());
    assert!(r.id > 0);
    assert_eq!(r.timestamp, "2024-01-01T08:00:00");
    assert_eq!(r.kind, RecordKind::Sentiment);
    assert_eq!(r.value, "4");
    assert_eq!(r.vlog_path, None);
    assert_eq!(r.lat, Some(25.03));
    assert_eq!(r.lng, Some(121.56));

    let r = builder.build(
        RecordKind::Vlog,
        "recorded",
        Some("/v/vlog_1.mp4".to_string()),
        None,
    );
    assert_eq!(r.vlog_path.as_deref(), Some("/v/vlog_1.mp4"));
    assert_eq!(r.lat, None);
    assert_eq!(r.lng, None);
}

#[test]
fn test_ids_do_not_decrease_over_time() {
    let dir = setup_test_dir("ids_increase");
    let ctx = system_context(&dir);

    let mut last = 0;
    for _ in 0..3 {
        let r = ctx
            .recorder()
            .record_sentiment(3, &ManualCoordinates(None))
            .expect("save");
        assert!(r.id >= last);
        last = r.id;
        sleep(Duration::from_millis(2));
    }
    assert_eq!(ctx.store.load_all().len(), 3);
}

#[test]
fn test_record_sentiment_stores_score_and_location() {
    let dir = setup_test_dir("sentiment_store");
    let ctx = fs_context(&dir, utc(2024, 1, 1, 5, 30, 0));
    let locator = ManualCoordinates(Some(Coordinates::new(25.03, 121.56)));

    let saved = ctx.recorder().record_sentiment(5, &locator).expect("save");

    let records = ctx.store.load_all();
    assert_eq!(records, vec![saved.clone()]);
    assert_eq!(saved.value, "5");
    assert_eq!(saved.timestamp, "2024-01-01T13:30:00");
    assert_eq!(
        saved.coordinates(),
        Some(Coordinates::new(25.03, 121.56))
    );
}

#[test]
fn test_record_sentiment_rejects_out_of_range_scores() {
    let dir = setup_test_dir("sentiment_range");
    let ctx = fs_context(&dir, utc(2024, 1, 1, 5, 30, 0));

    for score in [0, 6] {
        let err = ctx
            .recorder()
            .record_sentiment(score, &ManualCoordinates(None))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidScore(s) if s == score));
    }
    assert!(ctx.store.load_all().is_empty());
}

#[test]
fn test_record_vlog_moves_clip_and_logs_path() {
    let dir = setup_test_dir("vlog_import");
    let now = utc(2024, 1, 1, 11, 0, 0);
    let ctx = fs_context(&dir, now);

    let clip = dir.join("capture.mp4");
    fs::write(&clip, b"fake video").expect("write clip");

    let r = ctx
        .recorder()
        .record_vlog(&clip, &ctx.vlogs, &ManualCoordinates(None))
        .expect("vlog");

    let expected = dir
        .join("vlogs")
        .join(format!("vlog_{}.mp4", now.timestamp_millis()));
    assert_eq!(r.kind, RecordKind::Vlog);
    assert_eq!(r.value, "recorded");
    assert_eq!(r.vlog_path, Some(expected.to_string_lossy().to_string()));
    assert!(expected.exists());
    assert!(!clip.exists());
    assert_eq!(fs::read(&expected).expect("read"), b"fake video");
}

#[test]
fn test_vlog_file_name_matches_record_id() {
    let dir = setup_test_dir("vlog_same_instant");
    let ctx = system_context(&dir);

    for n in 0..3 {
        let clip = dir.join(format!("capture_{n}.mp4"));
        fs::write(&clip, b"clip").expect("write clip");

        let r = ctx
            .recorder()
            .record_vlog(&clip, &ctx.vlogs, &ManualCoordinates(None))
            .expect("vlog");

        let expected = ctx.vlogs.clip_path(r.id);
        assert_eq!(r.vlog_path, Some(expected.to_string_lossy().to_string()));
        assert!(expected.exists());
        sleep(Duration::from_millis(2));
    }
}

#[test]
fn test_record_vlog_missing_clip_is_an_error() {
    let dir = setup_test_dir("vlog_missing");
    let ctx = fs_context(&dir, utc(2024, 1, 1, 11, 0, 0));

    let err = ctx
        .recorder()
        .record_vlog(&dir.join("nope.mp4"), &ctx.vlogs, &ManualCoordinates(None))
        .unwrap_err();

    assert!(matches!(err, AppError::ClipNotFound(_)));
    assert!(ctx.store.load_all().is_empty());
}

#[test]
fn test_failed_move_leaves_the_source_in_place() {
    let dir = setup_test_dir("move_fallback");
    let clip = dir.join("capture.mp4");
    fs::write(&clip, b"clip").expect("write clip");

    let target = dir.join("missing").join("vlog_1.mp4");
    assert!(FsBackend.move_file(&clip, &target).is_err());

    assert_eq!(fs::read(&clip).expect("read"), b"clip");
    assert!(!target.exists());
}

#[test]
fn test_record_vlog_in_memory() {
    let backend = Arc::new(MemoryBackend::default());
    let now = utc(2024, 6, 1, 0, 0, 0);
    let ctx = context_with(
        Path::new("/app"),
        backend.clone(),
        Arc::new(FixedClock(now)),
    );

    backend
        .write(Path::new("/tmp/capture.mp4"), "clip")
        .expect("seed clip");

    let r = ctx
        .recorder()
        .record_vlog(
            Path::new("/tmp/capture.mp4"),
            &ctx.vlogs,
            &ManualCoordinates(Some(Coordinates::new(-33.9, 151.2))),
        )
        .expect("vlog");

    let stored = format!("/app/vlogs/vlog_{}.mp4", now.timestamp_millis());
    assert_eq!(r.vlog_path.as_deref(), Some(stored.as_str()));
    assert_eq!(r.lat, Some(-33.9));
    assert_eq!(
        backend.paths(),
        vec![
            Path::new("/app/emogo_log.json").to_path_buf(),
            Path::new(&stored).to_path_buf(),
        ]
    );
}
