use chrono::NaiveTime;
use sleeplog_types::SleepRecord;

use crate::helpers::time_math::hours_between;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Hours slept between `sleep_time` and `wake_time`.
///
/// Both values are read as times of the same day. A wake time earlier than the
/// sleep time rolls over to the next day, so the result is always in `[0, 24)`.
/// Equal times give `0.0`.
pub fn sleep_duration(sleep_time: NaiveTime, wake_time: NaiveTime) -> f64 {
    let hours = hours_between(sleep_time, wake_time);
    if wake_time < sleep_time {
        hours + HOURS_PER_DAY
    } else {
        hours
    }
}

pub trait SleepDuration {
    fn duration_hours(&self) -> f64;
}

impl SleepDuration for SleepRecord {
    fn duration_hours(&self) -> f64 {
        sleep_duration(self.sleep_time, self.wake_time)
    }
}
