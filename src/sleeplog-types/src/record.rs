use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::Quality;

/// One logged night.
///
/// `sleep_time` and `wake_time` carry no date: a wake time earlier than the
/// sleep time means the sleeper woke up on the following day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub sleep_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub quality: Option<Quality>,
    pub notes: Option<String>,
}

impl SleepRecord {
    pub fn new(date: NaiveDate, sleep_time: NaiveTime, wake_time: NaiveTime) -> Self {
        Self {
            date,
            sleep_time,
            wake_time,
            quality: None,
            notes: None,
        }
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Blank notes are dropped.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = normalize_notes(Some(notes.into()));
        self
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whole hour the sleeper went to bed, 0..=23.
    pub fn sleep_hour(&self) -> u32 {
        self.sleep_time.hour()
    }
}

pub fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
}
