pub mod builder;
pub mod clock;
pub mod context;
pub mod init;
pub mod recorder;
pub mod reminders;
pub mod schedule;
pub mod vlog;

pub use context::AppContext;
