//! Next collection time from a fixed list of daily trigger times.

use crate::errors::{AppError, AppResult};
use crate::models::CollectionTime;
use chrono::{Days, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Non-empty, ascending, duplicate-free list of daily trigger times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchedule {
    slots: Vec<NaiveTime>,
}

impl CollectionSchedule {
    pub fn new(times: Vec<CollectionTime>) -> AppResult<Self> {
        if times.is_empty() {
            return Err(AppError::InvalidSchedule(
                "at least one collection time is required".to_string(),
            ));
        }

        let mut slots = times
            .iter()
            .map(|t| {
                t.as_time()
                    .ok_or_else(|| AppError::InvalidSchedule(format!("{}:{:02}", t.hour, t.minute)))
            })
            .collect::<AppResult<Vec<_>>>()?;

        slots.sort();
        slots.dedup();

        Ok(Self { slots })
    }

    pub fn times(&self) -> Vec<CollectionTime> {
        self.slots.iter().copied().map(CollectionTime::from).collect()
    }

    /// First slot strictly after `now`'s hour and minute today, otherwise the
    /// first slot tomorrow. A slot equal to the current minute is skipped.
    pub fn next_trigger(&self, now: NaiveDateTime) -> NaiveDateTime {
        let current = (now.hour(), now.minute());

        let upcoming = self
            .slots
            .iter()
            .find(|slot| (slot.hour(), slot.minute()) > current);

        match upcoming {
            Some(slot) => now.date().and_time(*slot),
            None => (now.date() + Days::new(1)).and_time(self.slots[0]),
        }
    }

    pub fn time_until(&self, now: NaiveDateTime) -> TimeDelta {
        self.next_trigger(now) - now
    }
}
