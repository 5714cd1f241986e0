// Time source for the core.
//
// Use cases never read the system clock directly.

use chrono::{Local, NaiveDateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current wall-clock time in the service's local timezone.
    fn now(&self) -> NaiveDateTime;

    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
