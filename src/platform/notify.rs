use crate::errors::AppResult;
use crate::ui::messages::info;
use serde::Serialize;

/// Daily repeating reminder for one collection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub title: String,
    pub body: String,
    pub hour: u32,
    pub minute: u32,
}

/// Platform notification service. Delivery is entirely its business.
pub trait NotificationScheduler {
    fn cancel_all(&mut self) -> AppResult<()>;

    fn schedule_daily(&mut self, reminder: &Reminder) -> AppResult<()>;
}

/// Prints the registrations; used by the CLI, which has no push service.
#[derive(Debug, Default)]
pub struct ConsoleScheduler {
    pub registered: Vec<Reminder>,
}

impl NotificationScheduler for ConsoleScheduler {
    fn cancel_all(&mut self) -> AppResult<()> {
        self.registered.clear();
        Ok(())
    }

    fn schedule_daily(&mut self, reminder: &Reminder) -> AppResult<()> {
        info(format!(
            "Reminder scheduled for {}:{:02} ({})",
            reminder.hour, reminder.minute, reminder.body
        ));
        self.registered.push(reminder.clone());
        Ok(())
    }
}
