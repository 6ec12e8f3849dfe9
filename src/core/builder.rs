use crate::core::clock::{Clock, local_timestamp};
use crate::models::{Coordinates, Record, RecordKind};
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;

/// Stamps new records with an id and a fixed-offset local timestamp.
#[derive(Clone)]
pub struct RecordBuilder {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl RecordBuilder {
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self { clock, offset }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Build a record at "now". `value` is stored as given; the caller picks
    /// a value that makes sense for `kind`.
    pub fn build(
        &self,
        kind: RecordKind,
        value: impl Into<String>,
        vlog_path: Option<String>,
        coordinates: Option<Coordinates>,
    ) -> Record {
        self.build_at(self.clock.now(), kind, value, vlog_path, coordinates)
    }

    /// Build a record stamped at `now`.
    pub fn build_at(
        &self,
        now: DateTime<Utc>,
        kind: RecordKind,
        value: impl Into<String>,
        vlog_path: Option<String>,
        coordinates: Option<Coordinates>,
    ) -> Record {
        Record {
            id: now.timestamp_millis(),
            timestamp: local_timestamp(now, self.offset),
            kind,
            value: value.into(),
            vlog_path,
            lat: coordinates.map(|c| c.latitude),
            lng: coordinates.map(|c| c.longitude),
        }
    }
}
