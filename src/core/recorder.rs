use crate::core::builder::RecordBuilder;
use crate::core::vlog::VlogLibrary;
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, Record, RecordKind, VLOG_VALUE};
use crate::platform::CoordinateProvider;
use crate::storage::LogStore;
use log::info;
use std::path::Path;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Builds records and appends them to the log.
pub struct Recorder<'a> {
    store: &'a LogStore,
    builder: &'a RecordBuilder,
}

impl<'a> Recorder<'a> {
    pub fn new(store: &'a LogStore, builder: &'a RecordBuilder) -> Self {
        Self { store, builder }
    }

    /// Build a record at "now" and append it. Returns the stored record.
    pub fn save_structured_data(
        &self,
        kind: RecordKind,
        value: impl Into<String>,
        vlog_path: Option<String>,
        coordinates: Option<Coordinates>,
    ) -> AppResult<Record> {
        let record = self.builder.build(kind, value, vlog_path, coordinates);
        self.append(record)
    }

    fn append(&self, record: Record) -> AppResult<Record> {
        self.store.append(record.clone())?;

        info!("record {} saved: {} - {}", record.id, record.kind, record.value);
        Ok(record)
    }

    /// Store a 1..=5 mood score.
    pub fn record_sentiment(
        &self,
        score: u8,
        locator: &dyn CoordinateProvider,
    ) -> AppResult<Record> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AppError::InvalidScore(score));
        }

        let coordinates = locator.current_coordinates();
        self.save_structured_data(RecordKind::Sentiment, score.to_string(), None, coordinates)
    }

    /// Move `clip` into the library and store a vlog record pointing at it.
    pub fn record_vlog(
        &self,
        clip: &Path,
        vlogs: &VlogLibrary,
        locator: &dyn CoordinateProvider,
    ) -> AppResult<Record> {
        let coordinates = locator.current_coordinates();
        // clip name and record id share one clock reading
        let now = self.builder.clock().now();
        let stored = vlogs.import_clip(clip, now.timestamp_millis())?;

        self.append(self.builder.build_at(
            now,
            RecordKind::Vlog,
            VLOG_VALUE,
            Some(stored.to_string_lossy().to_string()),
            coordinates,
        ))
    }
}
