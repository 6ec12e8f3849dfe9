use crate::core::context::AppContext;
use crate::core::reminders::register_reminders;
use crate::platform::NotificationScheduler;
use log::{info, warn};

/// Outcome of `initialize`. Steps are independent: one failing does not
/// stop the others.
#[derive(Debug, Default)]
pub struct InitReport {
    pub log_created: bool,
    pub vlog_dir_created: bool,
    pub reminders: usize,
    pub failures: Vec<String>,
}

impl InitReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create the data file and the clip directory if missing, then register
/// the collection reminders.
pub fn initialize(ctx: &AppContext, scheduler: &mut dyn NotificationScheduler) -> InitReport {
    let mut report = InitReport::default();

    match ctx.store.ensure_initialized() {
        Ok(created) => {
            report.log_created = created;
            if created {
                info!("data log file initialized: {}", ctx.store.path().display());
            } else {
                info!("data log file already exists: {}", ctx.store.path().display());
            }
        }
        Err(e) => {
            warn!("failed to initialize data log file: {e}");
            report.failures.push(format!("data log: {e}"));
        }
    }

    match ctx.vlogs.ensure_dir() {
        Ok(created) => report.vlog_dir_created = created,
        Err(e) => {
            warn!("failed to set up vlog directory: {e}");
            report.failures.push(format!("vlog directory: {e}"));
        }
    }

    match register_reminders(scheduler, &ctx.schedule) {
        Ok(n) => report.reminders = n,
        Err(e) => {
            warn!("failed to schedule reminders: {e}");
            report.failures.push(format!("reminders: {e}"));
        }
    }

    report
}
