use chrono::NaiveTime;
use thiserror::Error;

use crate::duration::{HOURS_PER_DAY, sleep_duration};

/// Shortest sleep accepted from the logging form.
pub const MIN_ENTRY_HOURS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EntryError {
    #[error("Wake time must be after sleep time!")]
    NotAfterSleep,
    #[error("Sleep duration cannot be more than 24 hours! ({0:.1} hours)")]
    TooLong(f64),
    #[error("Sleep duration seems too short ({0:.1} hours). Please check your times.")]
    TooShort(f64),
}

/// Checks a new log entry before it is stored and returns its duration in hours.
pub fn validate_entry(sleep_time: NaiveTime, wake_time: NaiveTime) -> Result<f64, EntryError> {
    let duration = sleep_duration(sleep_time, wake_time);

    if duration <= 0.0 {
        Err(EntryError::NotAfterSleep)
    } else if duration > HOURS_PER_DAY {
        Err(EntryError::TooLong(duration))
    } else if duration < MIN_ENTRY_HOURS {
        Err(EntryError::TooShort(duration))
    } else {
        Ok(duration)
    }
}
