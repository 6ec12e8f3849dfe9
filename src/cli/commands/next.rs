use crate::core::AppContext;
use crate::errors::AppResult;
use crate::utils::mins2readable;
use crate::utils::time::{describe_trigger, minutes_ceil};
use chrono::Local;

/// Show when the next collection reminder fires (host local time, like the
/// reminders themselves).
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let now = Local::now().naive_local();
    let next = ctx.schedule.next_trigger(now);
    let left = minutes_ceil(ctx.schedule.time_until(now));

    println!("⏰ Next collection: {}", describe_trigger(next, now.date()));
    println!("   in {}", mins2readable(left));

    let times: Vec<String> = ctx.schedule.times().iter().map(|t| t.to_string()).collect();
    println!("   daily at {}", times.join(", "));

    Ok(())
}
