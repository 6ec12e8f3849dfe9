use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed daily time-of-day at which the user is asked to log data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionTime {
    pub hour: u32,
    pub minute: u32,
}

impl CollectionTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Parse `H:MM` / `HH:MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        Ok(Self::from(t))
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl From<NaiveTime> for CollectionTime {
    fn from(t: NaiveTime) -> Self {
        use chrono::Timelike;
        Self::new(t.hour(), t.minute())
    }
}

/// Rendered as `7:30`, the way reminders show it.
impl fmt::Display for CollectionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}
