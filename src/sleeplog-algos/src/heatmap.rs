use std::fmt::Display;

use chrono::Weekday;
use serde::Serialize;
use sleeplog_types::SleepRecord;

use crate::{
    duration::SleepDuration,
    helpers::{
        time_math::mean,
        weekday::{WEEKDAYS, weekday_index, weekday_name},
    },
};

pub const HOURS: usize = 24;

/// Mean sleep duration by weekday (rows, Monday first) and the hour the sleep
/// started (columns, 0..=23). Cells without records are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepHeatmap {
    cells: [[Option<f64>; HOURS]; 7],
}

impl SleepHeatmap {
    pub fn from_records(sleep_records: &[SleepRecord]) -> Self {
        let mut buckets: [[Vec<f64>; HOURS]; 7] = Default::default();

        for record in sleep_records {
            let row = weekday_index(record.weekday());
            let column = record.sleep_hour() as usize;
            buckets[row][column].push(record.duration_hours());
        }

        let cells = buckets.map(|row| {
            row.map(|durations| {
                if durations.is_empty() {
                    None
                } else {
                    Some(mean(&durations))
                }
            })
        });

        Self { cells }
    }

    pub fn get(&self, weekday: Weekday, hour: u32) -> Option<f64> {
        self.cells[weekday_index(weekday)]
            .get(hour as usize)
            .copied()
            .flatten()
    }

    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[Option<f64>; HOURS])> {
        WEEKDAYS.into_iter().zip(self.cells.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }
}

impl Display for SleepHeatmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:<10}", ""))?;
        for hour in 0..HOURS {
            f.write_fmt(format_args!("{:>5}", hour))?;
        }

        for (weekday, row) in self.rows() {
            f.write_fmt(format_args!("\n{:<10}", weekday_name(weekday)))?;
            for cell in row {
                match cell {
                    Some(hours) => f.write_fmt(format_args!("{:>5.1}", hours))?,
                    None => f.write_fmt(format_args!("{:>5}", "."))?,
                }
            }
        }
        Ok(())
    }
}
