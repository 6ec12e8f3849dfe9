use crate::core::schedule::CollectionSchedule;
use crate::errors::AppResult;
use crate::platform::{NotificationScheduler, Reminder};
use log::info;

pub const REMINDER_TITLE: &str = "Emogo collection time!";

/// One reminder per collection time, in schedule order.
pub fn reminders(schedule: &CollectionSchedule) -> Vec<Reminder> {
    schedule
        .times()
        .into_iter()
        .map(|t| Reminder {
            title: REMINDER_TITLE.to_string(),
            body: format!("Take a second to log your mood and a vlog ({t})."),
            hour: t.hour,
            minute: t.minute,
        })
        .collect()
}

/// Drop every existing registration, then register the whole schedule.
pub fn register_reminders(
    scheduler: &mut dyn NotificationScheduler,
    schedule: &CollectionSchedule,
) -> AppResult<usize> {
    scheduler.cancel_all()?;

    let all = reminders(schedule);
    for r in &all {
        scheduler.schedule_daily(r)?;
        info!("notification scheduled for {}:{:02}", r.hour, r.minute);
    }

    Ok(all.len())
}
