//! Core traits
//!
//! Abstractions over the pieces of the session that tests need to control.

use chrono::{DateTime, Local};

/// Source of the timestamp attached to each search
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
