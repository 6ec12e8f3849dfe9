use super::{coordinates::Coordinates, record_kind::RecordKind};
use serde::{Deserialize, Serialize};

/// Value stored for every vlog record.
pub const VLOG_VALUE: &str = "recorded";

/// One entry of the append-only log.
///
/// Field names match the on-disk JSON (`type`, `vlog_path`, `lat`, `lng`);
/// absent optionals are written as `null` and tolerated when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub value: String,
    #[serde(default)]
    pub vlog_path: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Record {
    /// Coordinates of the record, only when both halves were stored.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_pair(self.lat, self.lng)
    }

    pub fn has_location(&self) -> bool {
        self.coordinates().is_some()
    }
}
