use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a log record.
///
/// The set is open: tags written by a newer build are kept verbatim in
/// `Other` so they survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordKind {
    Sentiment,
    Vlog,
    Other(String),
}

impl RecordKind {
    pub fn as_str(&self) -> &str {
        match self {
            RecordKind::Sentiment => "sentiment",
            RecordKind::Vlog => "vlog",
            RecordKind::Other(tag) => tag,
        }
    }

    /// Parse a tag as typed on the command line (case-insensitive).
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "sentiment" | "mood" => RecordKind::Sentiment,
            "vlog" => RecordKind::Vlog,
            _ => RecordKind::Other(tag.to_string()),
        }
    }
}

impl From<String> for RecordKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "sentiment" => RecordKind::Sentiment,
            "vlog" => RecordKind::Vlog,
            _ => RecordKind::Other(s),
        }
    }
}

impl From<RecordKind> for String {
    fn from(kind: RecordKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
