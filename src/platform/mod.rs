//! Narrow interfaces to platform services the core only consumes.

pub mod location;
pub mod notify;
pub mod share;

pub use location::{CoordinateProvider, ManualCoordinates};
pub use notify::{ConsoleScheduler, NotificationScheduler, Reminder};
pub use share::{NoShare, PrintShare, ShareSink};
