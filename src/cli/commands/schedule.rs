use crate::core::AppContext;
use crate::core::reminders::register_reminders;
use crate::errors::AppResult;
use crate::platform::ConsoleScheduler;
use crate::ui::messages::success;

/// Re-register the collection reminders from the configured schedule.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let mut scheduler = ConsoleScheduler::default();
    let n = register_reminders(&mut scheduler, &ctx.schedule)?;
    success(format!("{n} daily reminders registered"));
    Ok(())
}
